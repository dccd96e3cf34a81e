use crate::server::error::{config::ConfigError, AppError};

/// Application configuration loaded from the environment.
///
/// `Config::from_env` is called once at startup, after `dotenvy` has loaded
/// the `.env` file if present.
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub oauth_auth_url: String,
    pub oauth_token_url: String,
    pub oauth_redirect_url: String,
    pub oauth_userinfo_url: String,

    /// Open id granted the admin role on login, bootstrapping the first admin.
    pub owner_open_id: Option<String>,

    pub discord_token: String,
    pub discord_notify_channel_id: u64,

    pub llm_api_url: String,
    pub llm_api_key: String,
    pub llm_model: String,

    /// Six-field cron expression; when set, tomorrow's-schedule reminders are
    /// also dispatched on this cadence in addition to the admin endpoint.
    pub reminder_cron: Option<String>,
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let discord_notify_channel_id = required("DISCORD_NOTIFY_CHANNEL_ID")?
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "DISCORD_NOTIFY_CHANNEL_ID".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            oauth_client_id: required("OAUTH_CLIENT_ID")?,
            oauth_client_secret: required("OAUTH_CLIENT_SECRET")?,
            oauth_auth_url: required("OAUTH_AUTH_URL")?,
            oauth_token_url: required("OAUTH_TOKEN_URL")?,
            oauth_redirect_url: required("OAUTH_REDIRECT_URL")?,
            oauth_userinfo_url: required("OAUTH_USERINFO_URL")?,
            owner_open_id: std::env::var("OWNER_OPEN_ID").ok(),
            discord_token: required("DISCORD_TOKEN")?,
            discord_notify_channel_id,
            llm_api_url: required("LLM_API_URL")?,
            llm_api_key: required("LLM_API_KEY")?,
            llm_model: std::env::var("LLM_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            reminder_cron: std::env::var("REMINDER_CRON").ok(),
        })
    }
}
