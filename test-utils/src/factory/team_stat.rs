//! Team rollup helper.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn create_team_stat(
    db: &DatabaseConnection,
    wins: i32,
    losses: i32,
    draws: i32,
) -> Result<entity::team_stat::Model, DbErr> {
    entity::team_stat::ActiveModel {
        period: ActiveValue::Set(Some("season".to_string())),
        total_games: ActiveValue::Set(wins + losses + draws),
        wins: ActiveValue::Set(wins),
        losses: ActiveValue::Set(losses),
        draws: ActiveValue::Set(draws),
        team_batting_avg: ActiveValue::Set(None),
        team_slugging: ActiveValue::Set(None),
        team_ops: ActiveValue::Set(None),
        team_era: ActiveValue::Set(None),
        team_whip: ActiveValue::Set(None),
        avg_runs_scored: ActiveValue::Set(None),
        avg_runs_allowed: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
