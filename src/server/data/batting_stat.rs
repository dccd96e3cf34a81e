//! Batting snapshot repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::stats::CreateBattingStatDto;

pub struct BattingStatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BattingStatRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All snapshots of one member, newest first.
    pub async fn by_member(
        &self,
        member_id: i32,
    ) -> Result<Vec<entity::batting_stat::Model>, DbErr> {
        entity::prelude::BattingStat::find()
            .filter(entity::batting_stat::Column::MemberId.eq(member_id))
            .order_by_desc(entity::batting_stat::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// The most recent snapshot of one member, if any.
    pub async fn latest_for_member(
        &self,
        member_id: i32,
    ) -> Result<Option<entity::batting_stat::Model>, DbErr> {
        entity::prelude::BattingStat::find()
            .filter(entity::batting_stat::Column::MemberId.eq(member_id))
            .order_by_desc(entity::batting_stat::Column::CreatedAt)
            .one(self.db)
            .await
    }

    /// Every snapshot joined with its member row. Ordering by derived batting
    /// average happens in the service, since rates are not stored.
    pub async fn list_with_members(
        &self,
    ) -> Result<Vec<(entity::batting_stat::Model, Option<entity::member::Model>)>, DbErr> {
        entity::prelude::BattingStat::find()
            .find_also_related(entity::prelude::Member)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        dto: &CreateBattingStatDto,
    ) -> Result<entity::batting_stat::Model, DbErr> {
        let now = Utc::now();
        entity::batting_stat::ActiveModel {
            member_id: ActiveValue::Set(dto.member_id),
            period: ActiveValue::Set(dto.period.clone()),
            games: ActiveValue::Set(dto.games),
            plate_appearances: ActiveValue::Set(dto.plate_appearances),
            at_bats: ActiveValue::Set(dto.at_bats),
            runs: ActiveValue::Set(dto.runs),
            hits: ActiveValue::Set(dto.hits),
            singles: ActiveValue::Set(dto.singles),
            doubles: ActiveValue::Set(dto.doubles),
            triples: ActiveValue::Set(dto.triples),
            home_runs: ActiveValue::Set(dto.home_runs),
            total_bases: ActiveValue::Set(dto.total_bases),
            rbis: ActiveValue::Set(dto.rbis),
            stolen_base_attempts: ActiveValue::Set(dto.stolen_base_attempts),
            stolen_bases: ActiveValue::Set(dto.stolen_bases),
            sacrifice_bunts: ActiveValue::Set(dto.sacrifice_bunts),
            sacrifice_flies: ActiveValue::Set(dto.sacrifice_flies),
            walks: ActiveValue::Set(dto.walks),
            strikeouts: ActiveValue::Set(dto.strikeouts),
            errors: ActiveValue::Set(dto.errors),
            vs_left_at_bats: ActiveValue::Set(dto.vs_left_at_bats),
            vs_left_hits: ActiveValue::Set(dto.vs_left_hits),
            vs_right_at_bats: ActiveValue::Set(dto.vs_right_at_bats),
            vs_right_hits: ActiveValue::Set(dto.vs_right_hits),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
