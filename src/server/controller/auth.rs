use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

/// Session key for the OAuth CSRF token.
static SESSION_OAUTH_CSRF_TOKEN: &str = "oauth:csrf_token";

use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Query parameters for the OAuth callback endpoint.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code for the token exchange.
    pub code: String,
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    // Store CSRF token in session for verification during callback
    session
        .insert(SESSION_OAUTH_CSRF_TOKEN, csrf_token.secret())
        .await?;

    Ok(Redirect::temporary(url.as_ref()))
}

pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.http_client, &state.oauth_client);

    validate_csrf(&session, &params.0.state).await?;

    let user = auth_service
        .callback(
            params.0.code,
            &state.oauth_userinfo_url,
            state.owner_open_id.as_deref(),
        )
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(Redirect::temporary("/"))
}

pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/me - the public "who am I" check.
///
/// Returns the logged-in user, or JSON `null` for anonymous callers; this is
/// the only endpoint that never rejects.
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(user_id) = AuthSession::new(&session).get_user_id().await? else {
        return Ok(Json(None::<UserDto>));
    };

    let user = UserRepository::new(&state.db).find_by_id(user_id).await?;

    Ok(Json(user.map(UserDto::from)))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state: Option<String> = session.remove(SESSION_OAUTH_CSRF_TOKEN).await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
