use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{analysis::AnalysisDto, api::ErrorDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::analysis::AnalysisService,
        state::AppState,
    },
};

/// Tag for grouping analysis endpoints in OpenAPI documentation
pub static ANALYSIS_TAG: &str = "analysis";

/// POST /api/members/{id}/analysis - AI coaching narrative.
///
/// Synchronous call to the configured language model; the text comes back
/// verbatim for markdown rendering. Members without any batting or pitching
/// data get a canned reply without a model call.
#[utoipa::path(
    post,
    path = "/api/members/{id}/analysis",
    tag = ANALYSIS_TAG,
    params(("id" = i32, Path, description = "Member id")),
    responses(
        (status = 200, description = "Narrative analysis", body = AnalysisDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Model call failed", body = ErrorDto)
    ),
)]
pub async fn analyze_member(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let analysis = AnalysisService::new(&state.db, &state.http_client, &state.llm)
        .generate(id)
        .await?;

    Ok((StatusCode::OK, Json(analysis)))
}
