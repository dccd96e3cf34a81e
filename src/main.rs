mod model;
mod server;

use std::sync::Arc;

use serenity::http::Http;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, scheduler, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session_layer = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client();
    let oauth_client = startup::setup_oauth_client(&config)?;
    let discord_http = Arc::new(Http::new(&config.discord_token));

    // Optional cron dispatch of the same reminder the admin endpoint sends.
    if let Some(cron) = config.reminder_cron.clone() {
        let scheduler_db = db.clone();
        let scheduler_http = discord_http.clone();
        let channel_id = config.discord_notify_channel_id;
        tokio::spawn(async move {
            if let Err(e) =
                scheduler::reminder::start_scheduler(scheduler_db, scheduler_http, channel_id, cron)
                    .await
            {
                tracing::error!("Reminder scheduler error: {}", e);
            }
        });
    }

    tracing::info!("Starting server on {}", config.bind_addr);

    let app = server::router::router()
        .with_state(AppState::new(
            db,
            http_client,
            oauth_client,
            discord_http,
            &config,
        ))
        .layer(session_layer);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
