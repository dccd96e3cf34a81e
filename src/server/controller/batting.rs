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
        stats::{BattingLeaderboardRowDto, BattingStatDto, CreateBattingStatDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::batting::BattingStatsService,
        state::AppState,
    },
};

/// Tag for grouping batting stat endpoints in OpenAPI documentation
pub static BATTING_TAG: &str = "batting";

/// GET /api/batting-stats - team leaderboard, best average first.
#[utoipa::path(
    get,
    path = "/api/batting-stats",
    tag = BATTING_TAG,
    responses(
        (status = 200, description = "Snapshots joined with roster info", body = Vec<BattingLeaderboardRowDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_batting_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rows = BattingStatsService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(rows)))
}

/// GET /api/batting-stats/member/{member_id}
#[utoipa::path(
    get,
    path = "/api/batting-stats/member/{member_id}",
    tag = BATTING_TAG,
    params(("member_id" = i32, Path, description = "Member id")),
    responses(
        (status = 200, description = "Member's snapshots, newest first", body = Vec<BattingStatDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn batting_stats_by_member(
    State(state): State<AppState>,
    session: Session,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let stats = BattingStatsService::new(&state.db).by_member(member_id).await?;

    Ok((StatusCode::OK, Json(stats)))
}

/// POST /api/batting-stats - admin import of a snapshot.
#[utoipa::path(
    post,
    path = "/api/batting-stats",
    tag = BATTING_TAG,
    request_body = CreateBattingStatDto,
    responses(
        (status = 201, description = "Snapshot stored", body = BattingStatDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_batting_stat(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBattingStatDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let stat = BattingStatsService::new(&state.db).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(stat)))
}
