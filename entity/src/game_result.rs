//! One row per played (or cancelled) game.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    #[sea_orm(string_value = "win")]
    Win,
    #[sea_orm(string_value = "loss")]
    Loss,
    #[sea_orm(string_value = "draw")]
    Draw,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "game_result")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Ordering key for double-headers on the same date.
    pub game_number: Option<i32>,
    pub game_date: Date,
    pub opponent: String,
    pub result: GameOutcome,
    pub home_away: Option<String>,
    pub team_score: Option<i32>,
    pub opponent_score: Option<i32>,
    pub innings: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
