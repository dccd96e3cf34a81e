use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct TeamStatDto {
    pub id: i32,
    pub period: Option<String>,
    pub total_games: i32,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    /// Derived from wins/losses/draws; `None` when no games are recorded.
    pub win_rate: Option<f64>,
    pub team_batting_avg: Option<f64>,
    pub team_slugging: Option<f64>,
    pub team_ops: Option<f64>,
    pub team_era: Option<f64>,
    pub team_whip: Option<f64>,
    pub avg_runs_scored: Option<f64>,
    pub avg_runs_allowed: Option<f64>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpsertTeamStatDto {
    pub period: Option<String>,
    #[serde(default)]
    pub total_games: i32,
    #[serde(default)]
    pub wins: i32,
    #[serde(default)]
    pub losses: i32,
    #[serde(default)]
    pub draws: i32,
    pub team_batting_avg: Option<f64>,
    pub team_slugging: Option<f64>,
    pub team_ops: Option<f64>,
    pub team_era: Option<f64>,
    pub team_whip: Option<f64>,
    pub avg_runs_scored: Option<f64>,
    pub avg_runs_allowed: Option<f64>,
}

/// One entry per calendar month that has game results, in chronological
/// order. Wins, losses and draws always sum to `games`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, ToSchema)]
pub struct MonthlyTrendDto {
    /// Month key formatted as `YYYY-MM`.
    pub month: String,
    pub games: i32,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub win_rate: Option<f64>,
    pub avg_runs_scored: Option<f64>,
    pub avg_runs_allowed: Option<f64>,
}
