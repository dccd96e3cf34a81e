//! Schedule factory.

use chrono::{NaiveDate, Utc};
use entity::schedule::EventType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

pub struct ScheduleFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    event_type: EventType,
    event_date: NaiveDate,
    start_time: Option<String>,
    end_time: Option<String>,
    location: Option<String>,
    created_by: Option<i32>,
}

impl<'a> ScheduleFactory<'a> {
    /// Defaults: unique title, practice on 2026-06-15 at 09:00-12:00.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Practice {}", id),
            event_type: EventType::Practice,
            event_date: NaiveDate::from_ymd_opt(2026, 6, 15).expect("valid default date"),
            start_time: Some("09:00".to_string()),
            end_time: Some("12:00".to_string()),
            location: Some("Main field".to_string()),
            created_by: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    pub fn event_date(mut self, event_date: NaiveDate) -> Self {
        self.event_date = event_date;
        self
    }

    pub fn start_time(mut self, start_time: Option<String>) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn end_time(mut self, end_time: Option<String>) -> Self {
        self.end_time = end_time;
        self
    }

    pub fn location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    pub fn created_by(mut self, user_id: i32) -> Self {
        self.created_by = Some(user_id);
        self
    }

    pub async fn build(self) -> Result<entity::schedule::Model, DbErr> {
        let now = Utc::now();
        entity::schedule::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            event_type: ActiveValue::Set(self.event_type),
            event_date: ActiveValue::Set(self.event_date),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            location: ActiveValue::Set(self.location),
            uniform: ActiveValue::Set(None),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a practice schedule on the given date.
pub async fn create_schedule_on(
    db: &DatabaseConnection,
    event_date: NaiveDate,
) -> Result<entity::schedule::Model, DbErr> {
    ScheduleFactory::new(db).event_date(event_date).build().await
}
