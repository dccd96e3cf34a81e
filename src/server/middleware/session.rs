//! Type-safe session wrapper for authentication state.
//!
//! Wraps the raw tower-sessions `Session` behind a small interface so the
//! session key and value type live in exactly one place.

use tower_sessions::Session;

use crate::server::error::AppError;

/// Session key holding the authenticated user's database id.
pub const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id, establishing a logged-in session.
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Returns the logged-in user's id, or `None` when not authenticated.
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Clears all session data; used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
