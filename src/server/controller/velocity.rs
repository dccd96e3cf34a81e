//! Velocity endpoints: standing pitch speed, exit velocity off the bat, and
//! the pulldown run-up drill.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        velocity::{
            CreateExitVelocityDto, CreatePitchVelocityDto, CreatePulldownVelocityDto,
            ExitVelocityDto, ExitVelocityRowDto, PitchVelocityDto, PitchVelocityRowDto,
            PulldownVelocityDto, PulldownVelocityRowDto,
        },
    },
    server::{
        data::{member::MemberRepository, velocity::VelocityRepository},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        state::AppState,
    },
};

/// Tag for grouping velocity endpoints in OpenAPI documentation
pub static VELOCITY_TAG: &str = "velocity";

async fn ensure_member_exists(state: &AppState, member_id: i32) -> Result<(), AppError> {
    if MemberRepository::new(&state.db)
        .get_by_id(member_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound(format!("Member {} not found", member_id)));
    }
    Ok(())
}

/// GET /api/velocity/pitch - team pitch velocity table, fastest first.
#[utoipa::path(
    get,
    path = "/api/velocity/pitch",
    tag = VELOCITY_TAG,
    responses(
        (status = 200, description = "Pitch velocity rows with roster info", body = Vec<PitchVelocityRowDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pitch_velocity(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rows = VelocityRepository::new(&state.db).pitch_with_members().await?;

    let dtos: Vec<PitchVelocityRowDto> = rows
        .into_iter()
        .filter_map(|(measurement, member)| {
            member.map(|member| PitchVelocityRowDto {
                member_name: member.name,
                grade: member.grade,
                measurement: measurement.into(),
            })
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/velocity/exit - team exit velocity table, best rank first.
#[utoipa::path(
    get,
    path = "/api/velocity/exit",
    tag = VELOCITY_TAG,
    responses(
        (status = 200, description = "Exit velocity rows with roster info", body = Vec<ExitVelocityRowDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_exit_velocity(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rows = VelocityRepository::new(&state.db).exit_with_members().await?;

    let dtos: Vec<ExitVelocityRowDto> = rows
        .into_iter()
        .filter_map(|(measurement, member)| {
            member.map(|member| ExitVelocityRowDto {
                member_name: member.name,
                grade: member.grade,
                measurement: measurement.into(),
            })
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/velocity/pulldown - team pulldown table, best rank first.
#[utoipa::path(
    get,
    path = "/api/velocity/pulldown",
    tag = VELOCITY_TAG,
    responses(
        (status = 200, description = "Pulldown rows with roster info", body = Vec<PulldownVelocityRowDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pulldown_velocity(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rows = VelocityRepository::new(&state.db).pulldown_with_members().await?;

    let dtos: Vec<PulldownVelocityRowDto> = rows
        .into_iter()
        .filter_map(|(measurement, member)| {
            member.map(|member| PulldownVelocityRowDto {
                member_name: member.name,
                grade: member.grade,
                measurement: measurement.into(),
            })
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/velocity/pitch/member/{member_id}
#[utoipa::path(
    get,
    path = "/api/velocity/pitch/member/{member_id}",
    tag = VELOCITY_TAG,
    params(("member_id" = i32, Path, description = "Member id")),
    responses(
        (status = 200, description = "Member's pitch velocity rows, newest first", body = Vec<PitchVelocityDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pitch_velocity_by_member(
    State(state): State<AppState>,
    session: Session,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rows = VelocityRepository::new(&state.db)
        .pitch_by_member(member_id)
        .await?;

    let dtos: Vec<PitchVelocityDto> = rows.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/velocity/exit/member/{member_id}
#[utoipa::path(
    get,
    path = "/api/velocity/exit/member/{member_id}",
    tag = VELOCITY_TAG,
    params(("member_id" = i32, Path, description = "Member id")),
    responses(
        (status = 200, description = "Member's exit velocity rows, newest first", body = Vec<ExitVelocityDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn exit_velocity_by_member(
    State(state): State<AppState>,
    session: Session,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rows = VelocityRepository::new(&state.db)
        .exit_by_member(member_id)
        .await?;

    let dtos: Vec<ExitVelocityDto> = rows.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/velocity/pulldown/member/{member_id}
#[utoipa::path(
    get,
    path = "/api/velocity/pulldown/member/{member_id}",
    tag = VELOCITY_TAG,
    params(("member_id" = i32, Path, description = "Member id")),
    responses(
        (status = 200, description = "Member's pulldown rows, newest first", body = Vec<PulldownVelocityDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pulldown_velocity_by_member(
    State(state): State<AppState>,
    session: Session,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rows = VelocityRepository::new(&state.db)
        .pulldown_by_member(member_id)
        .await?;

    let dtos: Vec<PulldownVelocityDto> = rows.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/velocity/pitch - admin import.
#[utoipa::path(
    post,
    path = "/api/velocity/pitch",
    tag = VELOCITY_TAG,
    request_body = CreatePitchVelocityDto,
    responses(
        (status = 201, description = "Measurement stored", body = PitchVelocityDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pitch_velocity(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePitchVelocityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ensure_member_exists(&state, payload.member_id).await?;

    let created = VelocityRepository::new(&state.db).create_pitch(&payload).await?;

    Ok((StatusCode::CREATED, Json(PitchVelocityDto::from(created))))
}

/// POST /api/velocity/exit - admin import.
#[utoipa::path(
    post,
    path = "/api/velocity/exit",
    tag = VELOCITY_TAG,
    request_body = CreateExitVelocityDto,
    responses(
        (status = 201, description = "Measurement stored", body = ExitVelocityDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_exit_velocity(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateExitVelocityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ensure_member_exists(&state, payload.member_id).await?;

    let created = VelocityRepository::new(&state.db).create_exit(&payload).await?;

    Ok((StatusCode::CREATED, Json(ExitVelocityDto::from(created))))
}

/// POST /api/velocity/pulldown - admin import.
#[utoipa::path(
    post,
    path = "/api/velocity/pulldown",
    tag = VELOCITY_TAG,
    request_body = CreatePulldownVelocityDto,
    responses(
        (status = 201, description = "Measurement stored", body = PulldownVelocityDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pulldown_velocity(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePulldownVelocityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ensure_member_exists(&state, payload.member_id).await?;

    let created = VelocityRepository::new(&state.db)
        .create_pulldown(&payload)
        .await?;

    Ok((StatusCode::CREATED, Json(PulldownVelocityDto::from(created))))
}
