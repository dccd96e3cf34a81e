//! Schedule data repository.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::schedule::{CreateScheduleDto, UpdateScheduleDto};

pub struct ScheduleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists schedules in an optional date window, ordered by date then start
    /// time.
    pub async fn list(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<entity::schedule::Model>, DbErr> {
        let mut query = entity::prelude::Schedule::find()
            .order_by_asc(entity::schedule::Column::EventDate)
            .order_by_asc(entity::schedule::Column::StartTime);

        if let Some(from) = from {
            query = query.filter(entity::schedule::Column::EventDate.gte(from));
        }
        if let Some(to) = to {
            query = query.filter(entity::schedule::Column::EventDate.lte(to));
        }

        query.all(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::schedule::Model>, DbErr> {
        entity::prelude::Schedule::find_by_id(id).one(self.db).await
    }

    /// All events on one calendar day; the reminder service's query.
    pub async fn for_date(&self, date: NaiveDate) -> Result<Vec<entity::schedule::Model>, DbErr> {
        entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::EventDate.eq(date))
            .order_by_asc(entity::schedule::Column::StartTime)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        dto: &CreateScheduleDto,
        created_by: Option<i32>,
    ) -> Result<entity::schedule::Model, DbErr> {
        let now = Utc::now();
        entity::schedule::ActiveModel {
            title: ActiveValue::Set(dto.title.clone()),
            description: ActiveValue::Set(dto.description.clone()),
            event_type: ActiveValue::Set(
                dto.event_type.unwrap_or(entity::schedule::EventType::Practice),
            ),
            event_date: ActiveValue::Set(dto.event_date),
            start_time: ActiveValue::Set(dto.start_time.clone()),
            end_time: ActiveValue::Set(dto.end_time.clone()),
            location: ActiveValue::Set(dto.location.clone()),
            uniform: ActiveValue::Set(dto.uniform.clone()),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        dto: &UpdateScheduleDto,
    ) -> Result<Option<entity::schedule::Model>, DbErr> {
        let Some(existing) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::schedule::ActiveModel = existing.into();
        if let Some(title) = &dto.title {
            active.title = ActiveValue::Set(title.clone());
        }
        if let Some(description) = &dto.description {
            active.description = ActiveValue::Set(Some(description.clone()));
        }
        if let Some(event_type) = dto.event_type {
            active.event_type = ActiveValue::Set(event_type);
        }
        if let Some(event_date) = dto.event_date {
            active.event_date = ActiveValue::Set(event_date);
        }
        if let Some(start_time) = &dto.start_time {
            active.start_time = ActiveValue::Set(Some(start_time.clone()));
        }
        if let Some(end_time) = &dto.end_time {
            active.end_time = ActiveValue::Set(Some(end_time.clone()));
        }
        if let Some(location) = &dto.location {
            active.location = ActiveValue::Set(Some(location.clone()));
        }
        if let Some(uniform) = &dto.uniform {
            active.uniform = ActiveValue::Set(Some(uniform.clone()));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Schedule::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
