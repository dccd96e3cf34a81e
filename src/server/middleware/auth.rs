//! Authorization guard evaluated before any business logic.
//!
//! Three access tiers exist: public endpoints skip the guard entirely,
//! protected endpoints call `require(&[])`, and admin endpoints call
//! `require(&[Permission::Admin])`. The guard resolves the session to a user
//! row and checks each requested permission, so a rejected request never
//! touches resource data.

use entity::user::UserRole;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the authenticated user and checks the requested permissions.
    ///
    /// # Returns
    /// - `Ok(user)` - Authenticated user satisfying every permission
    /// - `Err(AuthError::UserNotInSession)` - No login session (401)
    /// - `Err(AuthError::UserNotInDatabase)` - Stale session user id (401)
    /// - `Err(AuthError::AccessDenied)` - Authenticated but lacking a
    ///   permission (403)
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != UserRole::Admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "admin role required for this operation".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
