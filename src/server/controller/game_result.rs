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
        game::{CreateGameResultDto, GameResultDto, UpdateGameResultDto},
    },
    server::{
        data::game_result::GameResultRepository,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        state::AppState,
        util::validate::require_non_empty,
    },
};

/// Tag for grouping game result endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game_result";

/// GET /api/game-results - all games in chronological order.
#[utoipa::path(
    get,
    path = "/api/game-results",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "Games ordered by date and game number", body = Vec<GameResultDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_game_results(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let games = GameResultRepository::new(&state.db).list().await?;

    let dtos: Vec<GameResultDto> = games.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/game-results - admin only.
#[utoipa::path(
    post,
    path = "/api/game-results",
    tag = GAME_TAG,
    request_body = CreateGameResultDto,
    responses(
        (status = 201, description = "Game recorded", body = GameResultDto),
        (status = 400, description = "Empty opponent", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game_result(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateGameResultDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    require_non_empty(&payload.opponent, "opponent")?;

    let game = GameResultRepository::new(&state.db).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(GameResultDto::from(game))))
}

/// PUT /api/game-results/{id} - admin only.
#[utoipa::path(
    put,
    path = "/api/game-results/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game result id")),
    request_body = UpdateGameResultDto,
    responses(
        (status = 200, description = "Game updated", body = GameResultDto),
        (status = 400, description = "Empty opponent", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_game_result(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGameResultDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    if let Some(opponent) = &payload.opponent {
        require_non_empty(opponent, "opponent")?;
    }

    let game = GameResultRepository::new(&state.db)
        .update(id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Game result {} not found", id)))?;

    Ok((StatusCode::OK, Json(GameResultDto::from(game))))
}

/// DELETE /api/game-results/{id} - admin only.
#[utoipa::path(
    delete,
    path = "/api/game-results/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game result id")),
    responses(
        (status = 204, description = "Game deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_game_result(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let deleted = GameResultRepository::new(&state.db).delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Game result {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
