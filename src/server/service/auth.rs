//! OAuth2 login against the external identity provider.

use oauth2::{AuthorizationCode, CsrfToken, TokenResponse};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::UpsertUserParam,
    state::OAuth2Client,
};

/// Identity claims fetched from the provider's userinfo endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    /// Stable subject identifier; becomes the account's open id.
    pub sub: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Authorization URL plus the CSRF token to stash in the session.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .url();

        (authorize_url, csrf_state)
    }

    /// Completes the login: exchanges the code, fetches the user info and
    /// upserts the account.
    ///
    /// The owner open id, when configured and matching, is promoted to admin
    /// on every login; this is how the first admin comes to exist.
    pub async fn callback(
        &self,
        authorization_code: String,
        userinfo_url: &str,
        owner_open_id: Option<&str>,
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

        let user_info = self.fetch_userinfo(token.access_token().secret(), userinfo_url).await?;

        let make_admin = owner_open_id.is_some_and(|owner| owner == user_info.sub);

        let user = user_repo
            .upsert(UpsertUserParam {
                open_id: user_info.sub,
                name: user_info.name,
                email: user_info.email,
                login_method: Some("oauth".to_string()),
                make_admin,
            })
            .await?;

        Ok(user)
    }

    /// Retrieves the user's identity claims with the provided access token.
    async fn fetch_userinfo(
        &self,
        access_token: &str,
        userinfo_url: &str,
    ) -> Result<UserInfo, AppError> {
        let user_info = self
            .http_client
            .get(userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<UserInfo>()
            .await?;

        Ok(user_info)
    }
}
