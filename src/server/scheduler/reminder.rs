//! Scheduled dispatch of the tomorrow's-schedule reminder.
//!
//! Runs only when `REMINDER_CRON` is configured; the admin endpoint stays
//! the primary trigger and both go through the same service, so a cron run
//! and a manual run are indistinguishable to the channel.

use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{notification::Notifier, reminder::ReminderService},
};

/// Starts the reminder scheduler with the configured cron cadence.
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    notify_channel_id: u64,
    cron: String,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(cron.as_str(), move |_uuid, _lock| {
        let db = db.clone();
        let http = discord_http.clone();

        Box::pin(async move {
            let notifier = Notifier::new(http, notify_channel_id);
            match ReminderService::new(&db).send_tomorrow(&notifier).await {
                Ok(outcome) => tracing::info!("Scheduled reminder: {}", outcome.message),
                Err(e) => tracing::error!("Scheduled reminder failed: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Reminder scheduler started");

    Ok(())
}
