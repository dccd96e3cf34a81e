//! Team-wide rollup maintained by staff; win rate derives from the counts.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "team_stat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub period: Option<String>,
    pub total_games: i32,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub team_batting_avg: Option<f64>,
    pub team_slugging: Option<f64>,
    pub team_ops: Option<f64>,
    pub team_era: Option<f64>,
    pub team_whip: Option<f64>,
    pub avg_runs_scored: Option<f64>,
    pub avg_runs_allowed: Option<f64>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
