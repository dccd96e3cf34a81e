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
        member::{
            CreateMemberDto, MemberDetailDto, MemberDto, MemberListQuery, UpdateMemberDto,
        },
    },
    server::{
        data::member::MemberRepository,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::member::MemberService,
        state::AppState,
        util::validate::require_non_empty,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// GET /api/members - roster listing, active members by default.
#[utoipa::path(
    get,
    path = "/api/members",
    tag = MEMBER_TAG,
    params(
        ("active_only" = Option<bool>, Query, description = "Hide retired members (default: true)")
    ),
    responses(
        (status = 200, description = "Roster ordered by grade then name", body = Vec<MemberDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_members(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<MemberListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let members = MemberRepository::new(&state.db)
        .list(query.active_only.unwrap_or(true))
        .await?;

    let dtos: Vec<MemberDto> = members.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/members/me - the roster entry linked to the logged-in account.
#[utoipa::path(
    get,
    path = "/api/members/me",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "Linked member, or null when none", body = Option<MemberDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let member = MemberRepository::new(&state.db)
        .get_by_user_id(user.id)
        .await?;

    Ok((StatusCode::OK, Json(member.map(MemberDto::from))))
}

/// GET /api/members/{id}
#[utoipa::path(
    get,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member id")),
    responses(
        (status = 200, description = "Member found", body = MemberDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let member = MemberRepository::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))?;

    Ok((StatusCode::OK, Json(MemberDto::from(member))))
}

/// GET /api/members/{id}/detail - member plus every stat table at once.
#[utoipa::path(
    get,
    path = "/api/members/{id}/detail",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member id")),
    responses(
        (status = 200, description = "Aggregated member detail", body = MemberDetailDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member_detail(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let detail = MemberService::new(&state.db).full_detail(id).await?;

    Ok((StatusCode::OK, Json(detail)))
}

/// POST /api/members - add a roster entry. Admin only.
#[utoipa::path(
    post,
    path = "/api/members",
    tag = MEMBER_TAG,
    request_body = CreateMemberDto,
    responses(
        (status = 201, description = "Member created", body = MemberDto),
        (status = 400, description = "Empty name", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_member(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    require_non_empty(&payload.name, "name")?;

    let member = MemberRepository::new(&state.db).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(MemberDto::from(member))))
}

/// PUT /api/members/{id} - partial update. Admin only.
#[utoipa::path(
    put,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member id")),
    request_body = UpdateMemberDto,
    responses(
        (status = 200, description = "Member updated", body = MemberDto),
        (status = 400, description = "Empty name", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_member(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    if let Some(name) = &payload.name {
        require_non_empty(name, "name")?;
    }

    let member = MemberRepository::new(&state.db)
        .update(id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))?;

    Ok((StatusCode::OK, Json(MemberDto::from(member))))
}

/// DELETE /api/members/{id} - retires the member; stat history is kept.
#[utoipa::path(
    delete,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member id")),
    responses(
        (status = 204, description = "Member retired"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_member(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let retired = MemberRepository::new(&state.db).retire(id).await?;
    if !retired {
        return Err(AppError::NotFound(format!("Member {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
