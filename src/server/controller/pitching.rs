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
        stats::{CreatePitchingStatDto, PitchingLeaderboardRowDto, PitchingStatDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::pitching::PitchingStatsService,
        state::AppState,
    },
};

/// Tag for grouping pitching stat endpoints in OpenAPI documentation
pub static PITCHING_TAG: &str = "pitching";

/// GET /api/pitching-stats - team table ordered by ERA.
#[utoipa::path(
    get,
    path = "/api/pitching-stats",
    tag = PITCHING_TAG,
    responses(
        (status = 200, description = "Snapshots joined with roster info", body = Vec<PitchingLeaderboardRowDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pitching_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rows = PitchingStatsService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(rows)))
}

/// GET /api/pitching-stats/member/{member_id}
#[utoipa::path(
    get,
    path = "/api/pitching-stats/member/{member_id}",
    tag = PITCHING_TAG,
    params(("member_id" = i32, Path, description = "Member id")),
    responses(
        (status = 200, description = "Member's snapshots, newest first", body = Vec<PitchingStatDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pitching_stats_by_member(
    State(state): State<AppState>,
    session: Session,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let stats = PitchingStatsService::new(&state.db).by_member(member_id).await?;

    Ok((StatusCode::OK, Json(stats)))
}

/// POST /api/pitching-stats - admin import of a snapshot.
#[utoipa::path(
    post,
    path = "/api/pitching-stats",
    tag = PITCHING_TAG,
    request_body = CreatePitchingStatDto,
    responses(
        (status = 201, description = "Snapshot stored", body = PitchingStatDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pitching_stat(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePitchingStatDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let stat = PitchingStatsService::new(&state.db).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(stat)))
}
