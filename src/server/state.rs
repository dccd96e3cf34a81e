//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned per request through Axum's
//! state extraction. All fields are cheap to clone: the database connection
//! is a pool handle, `reqwest::Client` and `Arc<Http>` are reference counted,
//! and the settings structs are small.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;

use super::config::Config;

/// Type alias for the OAuth2 client configured for the identity provider.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Settings for the chat-completions endpoint used by the analysis service.
#[derive(Clone)]
pub struct LlmSettings {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
}

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for the identity provider and the LLM endpoint.
    /// Redirects are disabled to keep the OAuth token exchange safe.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the external identity provider.
    pub oauth_client: OAuth2Client,

    /// Userinfo endpoint queried after the token exchange.
    pub oauth_userinfo_url: String,

    /// Open id that is promoted to admin on login, if configured.
    pub owner_open_id: Option<String>,

    /// Discord HTTP client used by the notification services.
    pub discord_http: Arc<Http>,

    /// Channel receiving absence notices and schedule reminders.
    pub notify_channel_id: u64,

    /// Language-model endpoint settings for the analysis service.
    pub llm: LlmSettings,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        discord_http: Arc<Http>,
        config: &Config,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            oauth_userinfo_url: config.oauth_userinfo_url.clone(),
            owner_open_id: config.owner_open_id.clone(),
            discord_http,
            notify_channel_id: config.discord_notify_channel_id,
            llm: LlmSettings {
                api_url: config.llm_api_url.clone(),
                api_key: config.llm_api_key.clone(),
                model: config.llm_model.clone(),
            },
        }
    }
}
