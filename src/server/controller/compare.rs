use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        compare::{CompareRequestDto, MemberComparisonDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::compare::CompareService,
        state::AppState,
    },
};

/// Tag for grouping comparison endpoints in OpenAPI documentation
pub static COMPARE_TAG: &str = "compare";

/// POST /api/compare - side-by-side view of 2 to 6 members.
///
/// Aggregates come back in request order. The cardinality bound is enforced
/// before any query; an unknown member id fails the whole request.
#[utoipa::path(
    post,
    path = "/api/compare",
    tag = COMPARE_TAG,
    request_body = CompareRequestDto,
    responses(
        (status = 200, description = "One aggregate per requested member", body = Vec<MemberComparisonDto>),
        (status = 400, description = "Fewer than 2 or more than 6 ids", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "A requested member does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn compare_members(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CompareRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let comparisons = CompareService::new(&state.db)
        .compare(&payload.member_ids)
        .await?;

    Ok((StatusCode::OK, Json(comparisons)))
}
