use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        record::{
            CreateRecordDto, PlayerRecordDto, RecordListQuery, RecordSummaryDto, UpdateRecordDto,
        },
    },
    server::{
        data::{member::MemberRepository, player_record::PlayerRecordRepository},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::record::RecordService,
        state::AppState,
    },
};

/// Tag for grouping player record endpoints in OpenAPI documentation
pub static RECORD_TAG: &str = "record";

/// GET /api/records - one member's raw per-game lines, oldest first.
#[utoipa::path(
    get,
    path = "/api/records",
    tag = RECORD_TAG,
    params(
        ("member_id" = i32, Query, description = "Member whose records to list"),
        ("from" = Option<String>, Query, description = "Earliest record date (YYYY-MM-DD)"),
        ("to" = Option<String>, Query, description = "Latest record date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Record rows in date order", body = Vec<PlayerRecordDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_records(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RecordListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let records = PlayerRecordRepository::new(&state.db)
        .list_for_member(query.member_id, query.from, query.to)
        .await?;

    let dtos: Vec<PlayerRecordDto> = records.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/records/summary - career totals plus derived rates.
///
/// A member with no records gets the all-zero summary; rates come back null
/// whenever their denominator is zero.
#[utoipa::path(
    get,
    path = "/api/records/summary",
    tag = RECORD_TAG,
    params(("member_id" = i32, Query, description = "Member to summarize")),
    responses(
        (status = 200, description = "Career summary", body = RecordSummaryDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_summary(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RecordListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let summary = RecordService::new(&state.db).summary(query.member_id).await?;

    Ok((StatusCode::OK, Json(summary)))
}

/// POST /api/records - admin only; the member must exist.
#[utoipa::path(
    post,
    path = "/api/records",
    tag = RECORD_TAG,
    request_body = CreateRecordDto,
    responses(
        (status = 201, description = "Record created", body = PlayerRecordDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_record(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRecordDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    if MemberRepository::new(&state.db)
        .get_by_id(payload.member_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound(format!(
            "Member {} not found",
            payload.member_id
        )));
    }

    let record = PlayerRecordRepository::new(&state.db).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(PlayerRecordDto::from(record))))
}

/// PUT /api/records/{id} - admin only.
#[utoipa::path(
    put,
    path = "/api/records/{id}",
    tag = RECORD_TAG,
    params(("id" = i32, Path, description = "Record id")),
    request_body = UpdateRecordDto,
    responses(
        (status = 200, description = "Record updated", body = PlayerRecordDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_record(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRecordDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let record = PlayerRecordRepository::new(&state.db)
        .update(id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Record {} not found", id)))?;

    Ok((StatusCode::OK, Json(PlayerRecordDto::from(record))))
}

/// DELETE /api/records/{id} - admin only.
#[utoipa::path(
    delete,
    path = "/api/records/{id}",
    tag = RECORD_TAG,
    params(("id" = i32, Path, description = "Record id")),
    responses(
        (status = 204, description = "Record deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_record(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let deleted = PlayerRecordRepository::new(&state.db).delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Record {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
