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
        member::DateRangeQuery,
        schedule::{CreateScheduleDto, ScheduleDto, UpdateScheduleDto},
    },
    server::{
        data::schedule::ScheduleRepository,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        state::AppState,
        util::validate::require_non_empty,
    },
};

/// Tag for grouping schedule endpoints in OpenAPI documentation
pub static SCHEDULE_TAG: &str = "schedule";

/// GET /api/schedules - calendar listing in an optional date window.
#[utoipa::path(
    get,
    path = "/api/schedules",
    tag = SCHEDULE_TAG,
    params(
        ("from" = Option<String>, Query, description = "Earliest event date (YYYY-MM-DD)"),
        ("to" = Option<String>, Query, description = "Latest event date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Schedules ordered by date then start time", body = Vec<ScheduleDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_schedules(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let schedules = ScheduleRepository::new(&state.db)
        .list(query.from, query.to)
        .await?;

    let dtos: Vec<ScheduleDto> = schedules.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/schedules/{id}
#[utoipa::path(
    get,
    path = "/api/schedules/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = i32, Path, description = "Schedule id")),
    responses(
        (status = 200, description = "Schedule found", body = ScheduleDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let schedule = ScheduleRepository::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Schedule {} not found", id)))?;

    Ok((StatusCode::OK, Json(ScheduleDto::from(schedule))))
}

/// POST /api/schedules - admin only; the creator is recorded.
#[utoipa::path(
    post,
    path = "/api/schedules",
    tag = SCHEDULE_TAG,
    request_body = CreateScheduleDto,
    responses(
        (status = 201, description = "Schedule created", body = ScheduleDto),
        (status = 400, description = "Empty title", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    require_non_empty(&payload.title, "title")?;

    let schedule = ScheduleRepository::new(&state.db)
        .create(&payload, Some(user.id))
        .await?;

    Ok((StatusCode::CREATED, Json(ScheduleDto::from(schedule))))
}

/// PUT /api/schedules/{id} - admin only.
#[utoipa::path(
    put,
    path = "/api/schedules/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = i32, Path, description = "Schedule id")),
    request_body = UpdateScheduleDto,
    responses(
        (status = 200, description = "Schedule updated", body = ScheduleDto),
        (status = 400, description = "Empty title", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    if let Some(title) = &payload.title {
        require_non_empty(title, "title")?;
    }

    let schedule = ScheduleRepository::new(&state.db)
        .update(id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Schedule {} not found", id)))?;

    Ok((StatusCode::OK, Json(ScheduleDto::from(schedule))))
}

/// DELETE /api/schedules/{id} - admin only; absences and menus pointing at
/// the schedule keep their rows with the reference cleared.
#[utoipa::path(
    delete,
    path = "/api/schedules/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = i32, Path, description = "Schedule id")),
    responses(
        (status = 204, description = "Schedule deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let deleted = ScheduleRepository::new(&state.db).delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Schedule {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
