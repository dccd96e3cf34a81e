//! Practice menu data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::menu::{CreateMenuDto, UpdateMenuDto};

pub struct PracticeMenuRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PracticeMenuRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists menus, newest first, optionally only those of one schedule.
    pub async fn list(
        &self,
        schedule_id: Option<i32>,
    ) -> Result<Vec<entity::practice_menu::Model>, DbErr> {
        let mut query = entity::prelude::PracticeMenu::find()
            .order_by_desc(entity::practice_menu::Column::CreatedAt);

        if let Some(schedule_id) = schedule_id {
            query = query.filter(entity::practice_menu::Column::ScheduleId.eq(schedule_id));
        }

        query.all(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::practice_menu::Model>, DbErr> {
        entity::prelude::PracticeMenu::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn create(&self, dto: &CreateMenuDto) -> Result<entity::practice_menu::Model, DbErr> {
        let now = Utc::now();
        entity::practice_menu::ActiveModel {
            schedule_id: ActiveValue::Set(dto.schedule_id),
            category: ActiveValue::Set(dto.category),
            title: ActiveValue::Set(dto.title.clone()),
            description: ActiveValue::Set(dto.description.clone()),
            duration: ActiveValue::Set(dto.duration),
            target_group: ActiveValue::Set(dto.target_group.clone()),
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
        dto: &UpdateMenuDto,
    ) -> Result<Option<entity::practice_menu::Model>, DbErr> {
        let Some(existing) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::practice_menu::ActiveModel = existing.into();
        if let Some(schedule_id) = dto.schedule_id {
            active.schedule_id = ActiveValue::Set(Some(schedule_id));
        }
        if let Some(category) = dto.category {
            active.category = ActiveValue::Set(category);
        }
        if let Some(title) = &dto.title {
            active.title = ActiveValue::Set(title.clone());
        }
        if let Some(description) = &dto.description {
            active.description = ActiveValue::Set(Some(description.clone()));
        }
        if let Some(duration) = dto.duration {
            active.duration = ActiveValue::Set(Some(duration));
        }
        if let Some(target_group) = &dto.target_group {
            active.target_group = ActiveValue::Set(Some(target_group.clone()));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PracticeMenu::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
