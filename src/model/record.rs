use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PlayerRecordDto {
    pub id: i32,
    pub member_id: i32,
    pub record_date: NaiveDate,
    pub at_bats: i32,
    pub hits: i32,
    pub doubles: i32,
    pub triples: i32,
    pub home_runs: i32,
    pub rbis: i32,
    pub runs: i32,
    pub strikeouts: i32,
    pub walks: i32,
    pub stolen_bases: i32,
    pub innings_pitched: f64,
    pub earned_runs: i32,
    pub pitch_strikeouts: i32,
    pub pitch_walks: i32,
    pub hits_allowed: i32,
    pub wins: i32,
    pub losses: i32,
    pub notes: Option<String>,
}

impl From<entity::player_record::Model> for PlayerRecordDto {
    fn from(entity: entity::player_record::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            record_date: entity.record_date,
            at_bats: entity.at_bats,
            hits: entity.hits,
            doubles: entity.doubles,
            triples: entity.triples,
            home_runs: entity.home_runs,
            rbis: entity.rbis,
            runs: entity.runs,
            strikeouts: entity.strikeouts,
            walks: entity.walks,
            stolen_bases: entity.stolen_bases,
            innings_pitched: entity.innings_pitched,
            earned_runs: entity.earned_runs,
            pitch_strikeouts: entity.pitch_strikeouts,
            pitch_walks: entity.pitch_walks,
            hits_allowed: entity.hits_allowed,
            wins: entity.wins,
            losses: entity.losses,
            notes: entity.notes,
        }
    }
}

/// Counting fields default to zero so a batting-only or pitching-only line
/// can be submitted without the other half.
#[derive(Deserialize, ToSchema)]
pub struct CreateRecordDto {
    pub member_id: i32,
    pub record_date: NaiveDate,
    #[serde(default)]
    pub at_bats: i32,
    #[serde(default)]
    pub hits: i32,
    #[serde(default)]
    pub doubles: i32,
    #[serde(default)]
    pub triples: i32,
    #[serde(default)]
    pub home_runs: i32,
    #[serde(default)]
    pub rbis: i32,
    #[serde(default)]
    pub runs: i32,
    #[serde(default)]
    pub strikeouts: i32,
    #[serde(default)]
    pub walks: i32,
    #[serde(default)]
    pub stolen_bases: i32,
    #[serde(default)]
    pub innings_pitched: f64,
    #[serde(default)]
    pub earned_runs: i32,
    #[serde(default)]
    pub pitch_strikeouts: i32,
    #[serde(default)]
    pub pitch_walks: i32,
    #[serde(default)]
    pub hits_allowed: i32,
    #[serde(default)]
    pub wins: i32,
    #[serde(default)]
    pub losses: i32,
    pub notes: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateRecordDto {
    pub record_date: Option<NaiveDate>,
    pub at_bats: Option<i32>,
    pub hits: Option<i32>,
    pub doubles: Option<i32>,
    pub triples: Option<i32>,
    pub home_runs: Option<i32>,
    pub rbis: Option<i32>,
    pub runs: Option<i32>,
    pub strikeouts: Option<i32>,
    pub walks: Option<i32>,
    pub stolen_bases: Option<i32>,
    pub innings_pitched: Option<f64>,
    pub earned_runs: Option<i32>,
    pub pitch_strikeouts: Option<i32>,
    pub pitch_walks: Option<i32>,
    pub hits_allowed: Option<i32>,
    pub wins: Option<i32>,
    pub losses: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct RecordListQuery {
    pub member_id: i32,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Career totals plus derived rates for one member.
///
/// A member with no records gets all-zero totals; rates are `None` whenever
/// their denominator is zero, so the client renders a placeholder instead of
/// NaN.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct RecordSummaryDto {
    pub member_id: i32,
    pub games: i64,
    pub at_bats: i64,
    pub hits: i64,
    pub doubles: i64,
    pub triples: i64,
    pub home_runs: i64,
    pub rbis: i64,
    pub runs: i64,
    pub strikeouts: i64,
    pub walks: i64,
    pub stolen_bases: i64,
    pub innings_pitched: f64,
    pub earned_runs: i64,
    pub pitch_strikeouts: i64,
    pub pitch_walks: i64,
    pub hits_allowed: i64,
    pub wins: i64,
    pub losses: i64,
    pub batting_average: Option<f64>,
    pub on_base_percentage: Option<f64>,
    pub slugging_percentage: Option<f64>,
    pub ops: Option<f64>,
    pub era: Option<f64>,
    pub whip: Option<f64>,
}
