//! Pitching snapshot repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::stats::CreatePitchingStatDto;

pub struct PitchingStatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PitchingStatRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn by_member(
        &self,
        member_id: i32,
    ) -> Result<Vec<entity::pitching_stat::Model>, DbErr> {
        entity::prelude::PitchingStat::find()
            .filter(entity::pitching_stat::Column::MemberId.eq(member_id))
            .order_by_desc(entity::pitching_stat::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn latest_for_member(
        &self,
        member_id: i32,
    ) -> Result<Option<entity::pitching_stat::Model>, DbErr> {
        entity::prelude::PitchingStat::find()
            .filter(entity::pitching_stat::Column::MemberId.eq(member_id))
            .order_by_desc(entity::pitching_stat::Column::CreatedAt)
            .one(self.db)
            .await
    }

    /// Every snapshot joined with its member row; ERA ordering is applied by
    /// the service after the rates are derived.
    pub async fn list_with_members(
        &self,
    ) -> Result<Vec<(entity::pitching_stat::Model, Option<entity::member::Model>)>, DbErr> {
        entity::prelude::PitchingStat::find()
            .find_also_related(entity::prelude::Member)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        dto: &CreatePitchingStatDto,
    ) -> Result<entity::pitching_stat::Model, DbErr> {
        let now = Utc::now();
        entity::pitching_stat::ActiveModel {
            member_id: ActiveValue::Set(dto.member_id),
            period: ActiveValue::Set(dto.period.clone()),
            games: ActiveValue::Set(dto.games),
            innings_pitched: ActiveValue::Set(dto.innings_pitched),
            batters_faced: ActiveValue::Set(dto.batters_faced),
            hits_allowed: ActiveValue::Set(dto.hits_allowed),
            home_runs_allowed: ActiveValue::Set(dto.home_runs_allowed),
            walks: ActiveValue::Set(dto.walks),
            strikeouts: ActiveValue::Set(dto.strikeouts),
            earned_runs: ActiveValue::Set(dto.earned_runs),
            runs_allowed: ActiveValue::Set(dto.runs_allowed),
            first_pitch_strikes: ActiveValue::Set(dto.first_pitch_strikes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
