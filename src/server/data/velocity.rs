//! Velocity measurement repositories: pitch, exit and pulldown speeds.
//!
//! The three tables share a shape, so one repository carries the lot; the
//! team-wide listings join the member row for display.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::velocity::{
    CreateExitVelocityDto, CreatePitchVelocityDto, CreatePulldownVelocityDto,
};

pub struct VelocityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VelocityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    // ── Pitch velocity ──

    pub async fn pitch_by_member(
        &self,
        member_id: i32,
    ) -> Result<Vec<entity::pitch_velocity::Model>, DbErr> {
        entity::prelude::PitchVelocity::find()
            .filter(entity::pitch_velocity::Column::MemberId.eq(member_id))
            .order_by_desc(entity::pitch_velocity::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn latest_pitch_for_member(
        &self,
        member_id: i32,
    ) -> Result<Option<entity::pitch_velocity::Model>, DbErr> {
        entity::prelude::PitchVelocity::find()
            .filter(entity::pitch_velocity::Column::MemberId.eq(member_id))
            .order_by_desc(entity::pitch_velocity::Column::CreatedAt)
            .one(self.db)
            .await
    }

    /// Team-wide pitch velocity table, fastest average first.
    pub async fn pitch_with_members(
        &self,
    ) -> Result<Vec<(entity::pitch_velocity::Model, Option<entity::member::Model>)>, DbErr> {
        entity::prelude::PitchVelocity::find()
            .find_also_related(entity::prelude::Member)
            .order_by_desc(entity::pitch_velocity::Column::AvgFastball)
            .all(self.db)
            .await
    }

    pub async fn create_pitch(
        &self,
        dto: &CreatePitchVelocityDto,
    ) -> Result<entity::pitch_velocity::Model, DbErr> {
        entity::pitch_velocity::ActiveModel {
            member_id: ActiveValue::Set(dto.member_id),
            avg_fastball: ActiveValue::Set(dto.avg_fastball),
            avg_breaking: ActiveValue::Set(dto.avg_breaking),
            max_fastball: ActiveValue::Set(dto.max_fastball),
            max_breaking: ActiveValue::Set(dto.max_breaking),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    // ── Exit velocity ──

    pub async fn exit_by_member(
        &self,
        member_id: i32,
    ) -> Result<Vec<entity::exit_velocity::Model>, DbErr> {
        entity::prelude::ExitVelocity::find()
            .filter(entity::exit_velocity::Column::MemberId.eq(member_id))
            .order_by_desc(entity::exit_velocity::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn latest_exit_for_member(
        &self,
        member_id: i32,
    ) -> Result<Option<entity::exit_velocity::Model>, DbErr> {
        entity::prelude::ExitVelocity::find()
            .filter(entity::exit_velocity::Column::MemberId.eq(member_id))
            .order_by_desc(entity::exit_velocity::Column::CreatedAt)
            .one(self.db)
            .await
    }

    /// Team-wide exit velocity table, best average rank first.
    pub async fn exit_with_members(
        &self,
    ) -> Result<Vec<(entity::exit_velocity::Model, Option<entity::member::Model>)>, DbErr> {
        entity::prelude::ExitVelocity::find()
            .find_also_related(entity::prelude::Member)
            .order_by_asc(entity::exit_velocity::Column::AvgRank)
            .all(self.db)
            .await
    }

    pub async fn create_exit(
        &self,
        dto: &CreateExitVelocityDto,
    ) -> Result<entity::exit_velocity::Model, DbErr> {
        entity::exit_velocity::ActiveModel {
            member_id: ActiveValue::Set(dto.member_id),
            measure_date: ActiveValue::Set(dto.measure_date),
            avg_speed: ActiveValue::Set(dto.avg_speed),
            max_speed: ActiveValue::Set(dto.max_speed),
            avg_rank: ActiveValue::Set(dto.avg_rank),
            max_rank: ActiveValue::Set(dto.max_rank),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    // ── Pulldown velocity ──

    pub async fn pulldown_by_member(
        &self,
        member_id: i32,
    ) -> Result<Vec<entity::pulldown_velocity::Model>, DbErr> {
        entity::prelude::PulldownVelocity::find()
            .filter(entity::pulldown_velocity::Column::MemberId.eq(member_id))
            .order_by_desc(entity::pulldown_velocity::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn latest_pulldown_for_member(
        &self,
        member_id: i32,
    ) -> Result<Option<entity::pulldown_velocity::Model>, DbErr> {
        entity::prelude::PulldownVelocity::find()
            .filter(entity::pulldown_velocity::Column::MemberId.eq(member_id))
            .order_by_desc(entity::pulldown_velocity::Column::CreatedAt)
            .one(self.db)
            .await
    }

    /// Team-wide pulldown velocity table, best average rank first.
    pub async fn pulldown_with_members(
        &self,
    ) -> Result<Vec<(entity::pulldown_velocity::Model, Option<entity::member::Model>)>, DbErr> {
        entity::prelude::PulldownVelocity::find()
            .find_also_related(entity::prelude::Member)
            .order_by_asc(entity::pulldown_velocity::Column::AvgRank)
            .all(self.db)
            .await
    }

    pub async fn create_pulldown(
        &self,
        dto: &CreatePulldownVelocityDto,
    ) -> Result<entity::pulldown_velocity::Model, DbErr> {
        entity::pulldown_velocity::ActiveModel {
            member_id: ActiveValue::Set(dto.member_id),
            measure_date: ActiveValue::Set(dto.measure_date),
            avg_speed: ActiveValue::Set(dto.avg_speed),
            max_speed: ActiveValue::Set(dto.max_speed),
            avg_rank: ActiveValue::Set(dto.avg_rank),
            max_rank: ActiveValue::Set(dto.max_rank),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
