//! Team rollup repository. A single row is maintained; upsert replaces it.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::model::team::UpsertTeamStatDto;

pub struct TeamStatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamStatRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The current rollup row, if one has been recorded.
    pub async fn get(&self) -> Result<Option<entity::team_stat::Model>, DbErr> {
        entity::prelude::TeamStat::find()
            .order_by_desc(entity::team_stat::Column::CreatedAt)
            .one(self.db)
            .await
    }

    /// Replaces the rollup: updates the existing row or inserts the first
    /// one.
    pub async fn upsert(&self, dto: &UpsertTeamStatDto) -> Result<entity::team_stat::Model, DbErr> {
        if let Some(existing) = self.get().await? {
            let mut active: entity::team_stat::ActiveModel = existing.into();
            active.period = ActiveValue::Set(dto.period.clone());
            active.total_games = ActiveValue::Set(dto.total_games);
            active.wins = ActiveValue::Set(dto.wins);
            active.losses = ActiveValue::Set(dto.losses);
            active.draws = ActiveValue::Set(dto.draws);
            active.team_batting_avg = ActiveValue::Set(dto.team_batting_avg);
            active.team_slugging = ActiveValue::Set(dto.team_slugging);
            active.team_ops = ActiveValue::Set(dto.team_ops);
            active.team_era = ActiveValue::Set(dto.team_era);
            active.team_whip = ActiveValue::Set(dto.team_whip);
            active.avg_runs_scored = ActiveValue::Set(dto.avg_runs_scored);
            active.avg_runs_allowed = ActiveValue::Set(dto.avg_runs_allowed);
            return active.update(self.db).await;
        }

        entity::team_stat::ActiveModel {
            period: ActiveValue::Set(dto.period.clone()),
            total_games: ActiveValue::Set(dto.total_games),
            wins: ActiveValue::Set(dto.wins),
            losses: ActiveValue::Set(dto.losses),
            draws: ActiveValue::Set(dto.draws),
            team_batting_avg: ActiveValue::Set(dto.team_batting_avg),
            team_slugging: ActiveValue::Set(dto.team_slugging),
            team_ops: ActiveValue::Set(dto.team_ops),
            team_era: ActiveValue::Set(dto.team_era),
            team_whip: ActiveValue::Set(dto.team_whip),
            avg_runs_scored: ActiveValue::Set(dto.avg_runs_scored),
            avg_runs_allowed: ActiveValue::Set(dto.avg_runs_allowed),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
