use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        team::{MonthlyTrendDto, TeamStatDto, UpsertTeamStatDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team stat endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// GET /api/team-stats - the current rollup, or null before one exists.
#[utoipa::path(
    get,
    path = "/api/team-stats",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Team rollup with derived win rate", body = Option<TeamStatDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let stat = TeamService::new(&state.db).get().await?;

    Ok((StatusCode::OK, Json(stat)))
}

/// PUT /api/team-stats - admin only; replaces the rollup.
#[utoipa::path(
    put,
    path = "/api/team-stats",
    tag = TEAM_TAG,
    request_body = UpsertTeamStatDto,
    responses(
        (status = 200, description = "Rollup stored", body = TeamStatDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_team_stats(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertTeamStatDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let stat = TeamService::new(&state.db).upsert(&payload).await?;

    Ok((StatusCode::OK, Json(stat)))
}

/// GET /api/team-stats/monthly-trend - win-rate trend by calendar month.
///
/// Chronological, one entry per month that had played games; wins, losses
/// and draws always sum to the month's game count.
#[utoipa::path(
    get,
    path = "/api/team-stats/monthly-trend",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Trend points in chronological order", body = Vec<MonthlyTrendDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn monthly_trend(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let trend = TeamService::new(&state.db).monthly_trend().await?;

    Ok((StatusCode::OK, Json(trend)))
}
