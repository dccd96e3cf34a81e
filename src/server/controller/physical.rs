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
        physical::{
            CreatePhysicalDto, PhysicalByMemberQuery, PhysicalListQuery, PhysicalMeasurementDto,
            PhysicalRowDto, PhysicalScoreDto,
        },
    },
    server::{
        data::{member::MemberRepository, physical::PhysicalRepository},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::physical::PhysicalService,
        state::AppState,
    },
};

/// Tag for grouping physical measurement endpoints in OpenAPI documentation
pub static PHYSICAL_TAG: &str = "physical";

/// GET /api/physical - team history of one category.
#[utoipa::path(
    get,
    path = "/api/physical",
    tag = PHYSICAL_TAG,
    params(
        ("category" = String, Query, description = "sprint_27m | bench_press | clean | deadlift")
    ),
    responses(
        (status = 200, description = "Measurements with roster info, by date then name", body = Vec<PhysicalRowDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_physical(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PhysicalListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rows = PhysicalRepository::new(&state.db)
        .list_for_category(query.category)
        .await?;

    let dtos: Vec<PhysicalRowDto> = rows
        .into_iter()
        .filter_map(|(measurement, member)| {
            member.map(|member| PhysicalRowDto {
                member_name: member.name,
                grade: member.grade,
                measurement: measurement.into(),
            })
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/physical/member/{member_id} - one member's history.
#[utoipa::path(
    get,
    path = "/api/physical/member/{member_id}",
    tag = PHYSICAL_TAG,
    params(
        ("member_id" = i32, Path, description = "Member id"),
        ("category" = Option<String>, Query, description = "Restrict to one category")
    ),
    responses(
        (status = 200, description = "Measurements in date order", body = Vec<PhysicalMeasurementDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn physical_by_member(
    State(state): State<AppState>,
    session: Session,
    Path(member_id): Path<i32>,
    Query(query): Query<PhysicalByMemberQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rows = PhysicalRepository::new(&state.db)
        .by_member(member_id, query.category)
        .await?;

    let dtos: Vec<PhysicalMeasurementDto> = rows.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/physical/member/{member_id}/scores - normalized category scores.
///
/// Latest measurement per category against the league averages, recomputed
/// on every call.
#[utoipa::path(
    get,
    path = "/api/physical/member/{member_id}/scores",
    tag = PHYSICAL_TAG,
    params(("member_id" = i32, Path, description = "Member id")),
    responses(
        (status = 200, description = "One score per category", body = Vec<PhysicalScoreDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn physical_scores(
    State(state): State<AppState>,
    session: Session,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let scores = PhysicalService::new(&state.db).scores(member_id).await?;

    Ok((StatusCode::OK, Json(scores)))
}

/// POST /api/physical - admin import of one measurement.
#[utoipa::path(
    post,
    path = "/api/physical",
    tag = PHYSICAL_TAG,
    request_body = CreatePhysicalDto,
    responses(
        (status = 201, description = "Measurement stored", body = PhysicalMeasurementDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_physical(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePhysicalDto>,
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

    let created = PhysicalRepository::new(&state.db).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(PhysicalMeasurementDto::from(created))))
}
