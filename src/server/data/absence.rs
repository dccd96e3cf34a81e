//! Absence data repository.

use chrono::Utc;
use entity::absence::AbsenceStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::absence::CreateAbsenceDto;

pub struct AbsenceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AbsenceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists absences, newest first, optionally filtered by schedule and/or
    /// member.
    pub async fn list(
        &self,
        schedule_id: Option<i32>,
        member_id: Option<i32>,
    ) -> Result<Vec<entity::absence::Model>, DbErr> {
        let mut query = entity::prelude::Absence::find()
            .order_by_desc(entity::absence::Column::CreatedAt);

        if let Some(schedule_id) = schedule_id {
            query = query.filter(entity::absence::Column::ScheduleId.eq(schedule_id));
        }
        if let Some(member_id) = member_id {
            query = query.filter(entity::absence::Column::MemberId.eq(member_id));
        }

        query.all(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::absence::Model>, DbErr> {
        entity::prelude::Absence::find_by_id(id).one(self.db).await
    }

    /// Inserts a new absence in the initial `pending` state.
    pub async fn create(&self, dto: &CreateAbsenceDto) -> Result<entity::absence::Model, DbErr> {
        let now = Utc::now();
        entity::absence::ActiveModel {
            member_id: ActiveValue::Set(dto.member_id),
            schedule_id: ActiveValue::Set(dto.schedule_id),
            absence_date: ActiveValue::Set(dto.absence_date),
            reason: ActiveValue::Set(dto.reason.clone()),
            status: ActiveValue::Set(AbsenceStatus::Pending),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Writes a new status; transition rules are checked by the service.
    pub async fn update_status(
        &self,
        absence: entity::absence::Model,
        status: AbsenceStatus,
    ) -> Result<entity::absence::Model, DbErr> {
        let mut active: entity::absence::ActiveModel = absence.into();
        active.status = ActiveValue::Set(status);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }
}
