//! Roster data repository.

use chrono::Utc;
use entity::member::MemberStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::member::{CreateMemberDto, UpdateMemberDto};

pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists members ordered by grade then name.
    ///
    /// With `active_only` (the default listing) retired members are excluded;
    /// their historical stat rows are unaffected either way.
    pub async fn list(&self, active_only: bool) -> Result<Vec<entity::member::Model>, DbErr> {
        let mut query = entity::prelude::Member::find()
            .order_by_asc(entity::member::Column::Grade)
            .order_by_asc(entity::member::Column::Name);

        if active_only {
            query = query.filter(entity::member::Column::Status.eq(MemberStatus::Active));
        }

        query.all(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::member::Model>, DbErr> {
        entity::prelude::Member::find_by_id(id).one(self.db).await
    }

    /// Finds the roster entry linked to a login account, if any.
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::member::Model>, DbErr> {
        entity::prelude::Member::find()
            .filter(entity::member::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    pub async fn create(&self, dto: &CreateMemberDto) -> Result<entity::member::Model, DbErr> {
        let now = Utc::now();
        entity::member::ActiveModel {
            user_id: ActiveValue::Set(dto.user_id),
            name: ActiveValue::Set(dto.name.clone()),
            grade: ActiveValue::Set(dto.grade),
            position: ActiveValue::Set(dto.position.clone()),
            uniform_number: ActiveValue::Set(dto.uniform_number),
            class_number: ActiveValue::Set(dto.class_number.clone()),
            student_number: ActiveValue::Set(dto.student_number),
            kana: ActiveValue::Set(dto.kana.clone()),
            member_role: ActiveValue::Set(
                dto.member_role.unwrap_or(entity::member::MemberRole::Player),
            ),
            status: ActiveValue::Set(MemberStatus::Active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies a partial update; absent fields keep their stored value.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated member
    /// - `Ok(None)` - No member with that id
    pub async fn update(
        &self,
        id: i32,
        dto: &UpdateMemberDto,
    ) -> Result<Option<entity::member::Model>, DbErr> {
        let Some(existing) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::member::ActiveModel = existing.into();
        if let Some(name) = &dto.name {
            active.name = ActiveValue::Set(name.clone());
        }
        if let Some(grade) = dto.grade {
            active.grade = ActiveValue::Set(grade);
        }
        if let Some(position) = &dto.position {
            active.position = ActiveValue::Set(Some(position.clone()));
        }
        if let Some(uniform_number) = dto.uniform_number {
            active.uniform_number = ActiveValue::Set(Some(uniform_number));
        }
        if let Some(class_number) = &dto.class_number {
            active.class_number = ActiveValue::Set(Some(class_number.clone()));
        }
        if let Some(student_number) = dto.student_number {
            active.student_number = ActiveValue::Set(Some(student_number));
        }
        if let Some(kana) = &dto.kana {
            active.kana = ActiveValue::Set(Some(kana.clone()));
        }
        if let Some(member_role) = dto.member_role {
            active.member_role = ActiveValue::Set(member_role);
        }
        if let Some(status) = dto.status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(user_id) = dto.user_id {
            active.user_id = ActiveValue::Set(Some(user_id));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Retires a member instead of deleting the row, keeping every stat row
    /// they ever produced.
    ///
    /// # Returns
    /// - `Ok(true)` - Member retired
    /// - `Ok(false)` - No member with that id
    pub async fn retire(&self, id: i32) -> Result<bool, DbErr> {
        let Some(existing) = self.get_by_id(id).await? else {
            return Ok(false);
        };

        let mut active: entity::member::ActiveModel = existing.into();
        active.status = ActiveValue::Set(MemberStatus::Retired);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        Ok(true)
    }
}
