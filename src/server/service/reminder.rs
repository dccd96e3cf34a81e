//! Tomorrow's-schedule reminder.
//!
//! Triggered by the admin endpoint, and optionally by the cron job when
//! `REMINDER_CRON` is configured. There is no idempotency key: invoking it
//! twice sends twice.

use chrono::{Days, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::reminder::ReminderOutcomeDto,
    server::{
        data::schedule::ScheduleRepository,
        error::AppError,
        service::notification::{Notifier, COLOR_REMINDER},
    },
};

pub struct ReminderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReminderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends one reminder listing tomorrow's events, if there are any.
    ///
    /// Unlike absence notices this send is not swallowed; the caller asked
    /// for a reminder and should learn when Discord refused it.
    pub async fn send_tomorrow(&self, notifier: &Notifier) -> Result<ReminderOutcomeDto, AppError> {
        let tomorrow = Utc::now()
            .date_naive()
            .checked_add_days(Days::new(1))
            .ok_or_else(|| AppError::InternalError("Date overflow computing tomorrow".into()))?;

        let schedules = ScheduleRepository::new(self.db).for_date(tomorrow).await?;

        if schedules.is_empty() {
            return Ok(ReminderOutcomeDto {
                sent: false,
                count: 0,
                message: "No schedules for tomorrow.".to_string(),
            });
        }

        let title = format!("Reminder: tomorrow's schedule ({})", tomorrow);
        let content = format_schedule_lines(&schedules);
        notifier.send(&title, &content, COLOR_REMINDER).await?;

        Ok(ReminderOutcomeDto {
            sent: true,
            count: schedules.len() as i32,
            message: format!("Sent a reminder covering {} event(s).", schedules.len()),
        })
    }
}

/// One bullet line per event: title, times and location.
pub fn format_schedule_lines(schedules: &[entity::schedule::Model]) -> String {
    schedules
        .iter()
        .map(|s| {
            let time = match (&s.start_time, &s.end_time) {
                (Some(start), Some(end)) => format!("{}-{}", start, end),
                (Some(start), None) => start.clone(),
                _ => "time TBD".to_string(),
            };
            format!(
                "- {} ({}) @ {}",
                s.title,
                time,
                s.location.as_deref().unwrap_or("location TBD"),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use entity::schedule::EventType;

    fn schedule(
        title: &str,
        start: Option<&str>,
        end: Option<&str>,
        location: Option<&str>,
    ) -> entity::schedule::Model {
        entity::schedule::Model {
            id: 0,
            title: title.to_string(),
            description: None,
            event_type: EventType::Practice,
            event_date: NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
            start_time: start.map(str::to_string),
            end_time: end.map(str::to_string),
            location: location.map(str::to_string),
            uniform: None,
            created_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn formats_one_line_per_event() {
        let schedules = vec![
            schedule("Morning practice", Some("09:00"), Some("12:00"), Some("Main field")),
            schedule("Team meeting", Some("13:00"), None, None),
        ];

        let text = format_schedule_lines(&schedules);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "- Morning practice (09:00-12:00) @ Main field");
        assert_eq!(lines[1], "- Team meeting (13:00) @ location TBD");
    }

    #[test]
    fn missing_times_get_a_placeholder() {
        let text = format_schedule_lines(&[schedule("Open day", None, None, Some("Gym"))]);
        assert_eq!(text, "- Open day (time TBD) @ Gym");
    }
}
