use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        absence::{AbsenceDto, AbsenceListQuery, CreateAbsenceDto, UpdateAbsenceStatusDto},
        api::ErrorDto,
    },
    server::{
        data::absence::AbsenceRepository,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{absence::AbsenceService, notification::Notifier},
        state::AppState,
    },
};

/// Tag for grouping absence endpoints in OpenAPI documentation
pub static ABSENCE_TAG: &str = "absence";

/// GET /api/absences - newest first, with optional schedule/member filters.
#[utoipa::path(
    get,
    path = "/api/absences",
    tag = ABSENCE_TAG,
    params(
        ("schedule_id" = Option<i32>, Query, description = "Only absences for this schedule"),
        ("member_id" = Option<i32>, Query, description = "Only absences of this member")
    ),
    responses(
        (status = 200, description = "Absences, newest first", body = Vec<AbsenceDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_absences(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AbsenceListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let absences = AbsenceRepository::new(&state.db)
        .list(query.schedule_id, query.member_id)
        .await?;

    let dtos: Vec<AbsenceDto> = absences.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/absences - any authenticated member may report an absence.
///
/// The club channel is notified best-effort: a failed send never fails the
/// write that already happened.
#[utoipa::path(
    post,
    path = "/api/absences",
    tag = ABSENCE_TAG,
    request_body = CreateAbsenceDto,
    responses(
        (status = 201, description = "Absence recorded (status pending)", body = AbsenceDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_absence(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAbsenceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notifier = Notifier::new(state.discord_http.clone(), state.notify_channel_id);
    let absence = AbsenceService::new(&state.db)
        .create(&payload, &notifier)
        .await?;

    Ok((StatusCode::CREATED, Json(absence)))
}

/// PUT /api/absences/{id}/status - admin only.
///
/// The only legal transitions are `pending` to `approved` or `noted`.
#[utoipa::path(
    put,
    path = "/api/absences/{id}/status",
    tag = ABSENCE_TAG,
    params(("id" = i32, Path, description = "Absence id")),
    request_body = UpdateAbsenceStatusDto,
    responses(
        (status = 200, description = "Status updated", body = AbsenceDto),
        (status = 400, description = "Transition not allowed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Absence not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_absence_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAbsenceStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let absence = AbsenceService::new(&state.db)
        .update_status(id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(absence)))
}
