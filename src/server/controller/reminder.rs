use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, reminder::ReminderOutcomeDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{notification::Notifier, reminder::ReminderService},
        state::AppState,
    },
};

/// Tag for grouping reminder endpoints in OpenAPI documentation
pub static REMINDER_TAG: &str = "reminder";

/// POST /api/reminders/check-tomorrow - admin only.
///
/// Looks up tomorrow's schedules and sends one notification covering them,
/// or reports that there is nothing to send. Re-invoking re-sends.
#[utoipa::path(
    post,
    path = "/api/reminders/check-tomorrow",
    tag = REMINDER_TAG,
    responses(
        (status = 200, description = "Dispatch outcome", body = ReminderOutcomeDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Discord or database error", body = ErrorDto)
    ),
)]
pub async fn check_tomorrow(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let notifier = Notifier::new(state.discord_http.clone(), state.notify_channel_id);
    let outcome = ReminderService::new(&state.db).send_tomorrow(&notifier).await?;

    Ok((StatusCode::OK, Json(outcome)))
}
