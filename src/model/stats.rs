//! Batting and pitching snapshot payloads.
//!
//! The stored rows carry counting numbers only; every rate in these DTOs is
//! derived by the service layer when the row is read.

use entity::member::Grade;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct BattingStatDto {
    pub id: i32,
    pub member_id: i32,
    pub period: Option<String>,
    pub games: i32,
    pub plate_appearances: i32,
    pub at_bats: i32,
    pub runs: i32,
    pub hits: i32,
    pub singles: i32,
    pub doubles: i32,
    pub triples: i32,
    pub home_runs: i32,
    pub total_bases: i32,
    pub rbis: i32,
    pub stolen_base_attempts: i32,
    pub stolen_bases: i32,
    pub sacrifice_bunts: i32,
    pub sacrifice_flies: i32,
    pub walks: i32,
    pub strikeouts: i32,
    pub errors: i32,
    pub vs_left_at_bats: i32,
    pub vs_left_hits: i32,
    pub vs_right_at_bats: i32,
    pub vs_right_hits: i32,
    pub batting_average: Option<f64>,
    pub on_base_percentage: Option<f64>,
    pub slugging_percentage: Option<f64>,
    pub ops: Option<f64>,
    pub vs_left_average: Option<f64>,
    pub vs_right_average: Option<f64>,
}

/// A batting snapshot joined with roster info for the leaderboard view.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct BattingLeaderboardRowDto {
    pub member_name: String,
    #[schema(value_type = String)]
    pub grade: Grade,
    pub position: Option<String>,
    pub uniform_number: Option<i32>,
    #[serde(flatten)]
    pub stat: BattingStatDto,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateBattingStatDto {
    pub member_id: i32,
    pub period: Option<String>,
    #[serde(default)]
    pub games: i32,
    #[serde(default)]
    pub plate_appearances: i32,
    #[serde(default)]
    pub at_bats: i32,
    #[serde(default)]
    pub runs: i32,
    #[serde(default)]
    pub hits: i32,
    #[serde(default)]
    pub singles: i32,
    #[serde(default)]
    pub doubles: i32,
    #[serde(default)]
    pub triples: i32,
    #[serde(default)]
    pub home_runs: i32,
    #[serde(default)]
    pub total_bases: i32,
    #[serde(default)]
    pub rbis: i32,
    #[serde(default)]
    pub stolen_base_attempts: i32,
    #[serde(default)]
    pub stolen_bases: i32,
    #[serde(default)]
    pub sacrifice_bunts: i32,
    #[serde(default)]
    pub sacrifice_flies: i32,
    #[serde(default)]
    pub walks: i32,
    #[serde(default)]
    pub strikeouts: i32,
    #[serde(default)]
    pub errors: i32,
    #[serde(default)]
    pub vs_left_at_bats: i32,
    #[serde(default)]
    pub vs_left_hits: i32,
    #[serde(default)]
    pub vs_right_at_bats: i32,
    #[serde(default)]
    pub vs_right_hits: i32,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PitchingStatDto {
    pub id: i32,
    pub member_id: i32,
    pub period: Option<String>,
    pub games: i32,
    pub innings_pitched: f64,
    pub batters_faced: i32,
    pub hits_allowed: i32,
    pub home_runs_allowed: i32,
    pub walks: i32,
    pub strikeouts: i32,
    pub earned_runs: i32,
    pub runs_allowed: i32,
    pub first_pitch_strikes: i32,
    pub era: Option<f64>,
    pub whip: Option<f64>,
    pub strikeout_rate: Option<f64>,
    pub strikeout_percentage: Option<f64>,
    pub walk_percentage: Option<f64>,
    pub first_strike_percentage: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PitchingLeaderboardRowDto {
    pub member_name: String,
    #[schema(value_type = String)]
    pub grade: Grade,
    pub position: Option<String>,
    #[serde(flatten)]
    pub stat: PitchingStatDto,
}

#[derive(Deserialize, ToSchema)]
pub struct CreatePitchingStatDto {
    pub member_id: i32,
    pub period: Option<String>,
    #[serde(default)]
    pub games: i32,
    #[serde(default)]
    pub innings_pitched: f64,
    #[serde(default)]
    pub batters_faced: i32,
    #[serde(default)]
    pub hits_allowed: i32,
    #[serde(default)]
    pub home_runs_allowed: i32,
    #[serde(default)]
    pub walks: i32,
    #[serde(default)]
    pub strikeouts: i32,
    #[serde(default)]
    pub earned_runs: i32,
    #[serde(default)]
    pub runs_allowed: i32,
    #[serde(default)]
    pub first_pitch_strikes: i32,
}
