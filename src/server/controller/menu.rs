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
        menu::{CreateMenuDto, MenuListQuery, PracticeMenuDto, UpdateMenuDto},
    },
    server::{
        data::practice_menu::PracticeMenuRepository,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        state::AppState,
        util::validate::require_non_empty,
    },
};

/// Tag for grouping practice menu endpoints in OpenAPI documentation
pub static MENU_TAG: &str = "menu";

/// GET /api/menus - drill listing, optionally scoped to one schedule.
#[utoipa::path(
    get,
    path = "/api/menus",
    tag = MENU_TAG,
    params(
        ("schedule_id" = Option<i32>, Query, description = "Only menus of this schedule")
    ),
    responses(
        (status = 200, description = "Menus, newest first", body = Vec<PracticeMenuDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_menus(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<MenuListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let menus = PracticeMenuRepository::new(&state.db)
        .list(query.schedule_id)
        .await?;

    let dtos: Vec<PracticeMenuDto> = menus.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/menus - admin only.
#[utoipa::path(
    post,
    path = "/api/menus",
    tag = MENU_TAG,
    request_body = CreateMenuDto,
    responses(
        (status = 201, description = "Menu created", body = PracticeMenuDto),
        (status = 400, description = "Empty title", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_menu(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMenuDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    require_non_empty(&payload.title, "title")?;

    let menu = PracticeMenuRepository::new(&state.db).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(PracticeMenuDto::from(menu))))
}

/// PUT /api/menus/{id} - admin only.
#[utoipa::path(
    put,
    path = "/api/menus/{id}",
    tag = MENU_TAG,
    params(("id" = i32, Path, description = "Menu id")),
    request_body = UpdateMenuDto,
    responses(
        (status = 200, description = "Menu updated", body = PracticeMenuDto),
        (status = 400, description = "Empty title", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Menu not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_menu(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMenuDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    if let Some(title) = &payload.title {
        require_non_empty(title, "title")?;
    }

    let menu = PracticeMenuRepository::new(&state.db)
        .update(id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Menu {} not found", id)))?;

    Ok((StatusCode::OK, Json(PracticeMenuDto::from(menu))))
}

/// DELETE /api/menus/{id} - admin only.
#[utoipa::path(
    delete,
    path = "/api/menus/{id}",
    tag = MENU_TAG,
    params(("id" = i32, Path, description = "Menu id")),
    responses(
        (status = 204, description = "Menu deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Menu not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_menu(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let deleted = PracticeMenuRepository::new(&state.db).delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Menu {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
