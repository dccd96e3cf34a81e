//! Discord notification sink.
//!
//! One embed per notice, posted to the configured club channel through the
//! Serenity HTTP client. No gateway connection is needed for this.

use serenity::{
    all::{ChannelId, CreateEmbed, CreateMessage},
    http::Http,
};
use std::sync::Arc;

use crate::server::error::AppError;

/// Embed color for absence notices.
pub const COLOR_ABSENCE: u32 = 0xf39c12;
/// Embed color for schedule reminders.
pub const COLOR_REMINDER: u32 = 0x3498db;

pub struct Notifier {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl Notifier {
    pub fn new(http: Arc<Http>, channel_id: u64) -> Self {
        Self {
            http,
            channel_id: ChannelId::new(channel_id),
        }
    }

    /// Posts one embed to the club channel.
    pub async fn send(&self, title: &str, content: &str, color: u32) -> Result<(), AppError> {
        let embed = CreateEmbed::new()
            .title(title.to_string())
            .description(content.to_string())
            .color(color);

        let message = CreateMessage::new().embed(embed);
        self.channel_id.send_message(&self.http, message).await?;

        Ok(())
    }
}
