//! Absence factory.

use chrono::{NaiveDate, Utc};
use entity::absence::AbsenceStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct AbsenceFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    schedule_id: Option<i32>,
    absence_date: NaiveDate,
    reason: Option<String>,
    status: AbsenceStatus,
}

impl<'a> AbsenceFactory<'a> {
    /// Defaults: pending absence on 2026-06-15 with a generic reason.
    pub fn new(db: &'a DatabaseConnection, member_id: i32) -> Self {
        Self {
            db,
            member_id,
            schedule_id: None,
            absence_date: NaiveDate::from_ymd_opt(2026, 6, 15).expect("valid default date"),
            reason: Some("Family commitment".to_string()),
            status: AbsenceStatus::Pending,
        }
    }

    pub fn schedule_id(mut self, schedule_id: i32) -> Self {
        self.schedule_id = Some(schedule_id);
        self
    }

    pub fn absence_date(mut self, absence_date: NaiveDate) -> Self {
        self.absence_date = absence_date;
        self
    }

    pub fn reason(mut self, reason: Option<String>) -> Self {
        self.reason = reason;
        self
    }

    pub fn status(mut self, status: AbsenceStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::absence::Model, DbErr> {
        let now = Utc::now();
        entity::absence::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            schedule_id: ActiveValue::Set(self.schedule_id),
            absence_date: ActiveValue::Set(self.absence_date),
            reason: ActiveValue::Set(self.reason),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending absence for the member.
pub async fn create_absence(
    db: &DatabaseConnection,
    member_id: i32,
) -> Result<entity::absence::Model, DbErr> {
    AbsenceFactory::new(db, member_id).build().await
}
