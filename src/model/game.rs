use chrono::NaiveDate;
use entity::game_result::GameOutcome;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct GameResultDto {
    pub id: i32,
    pub game_number: Option<i32>,
    pub game_date: NaiveDate,
    pub opponent: String,
    #[schema(value_type = String)]
    pub result: GameOutcome,
    pub home_away: Option<String>,
    pub team_score: Option<i32>,
    pub opponent_score: Option<i32>,
    pub innings: Option<String>,
    pub notes: Option<String>,
}

impl From<entity::game_result::Model> for GameResultDto {
    fn from(entity: entity::game_result::Model) -> Self {
        Self {
            id: entity.id,
            game_number: entity.game_number,
            game_date: entity.game_date,
            opponent: entity.opponent,
            result: entity.result,
            home_away: entity.home_away,
            team_score: entity.team_score,
            opponent_score: entity.opponent_score,
            innings: entity.innings,
            notes: entity.notes,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateGameResultDto {
    pub game_number: Option<i32>,
    pub game_date: NaiveDate,
    pub opponent: String,
    #[schema(value_type = String)]
    pub result: GameOutcome,
    pub home_away: Option<String>,
    pub team_score: Option<i32>,
    pub opponent_score: Option<i32>,
    pub innings: Option<String>,
    pub notes: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateGameResultDto {
    pub game_number: Option<i32>,
    pub game_date: Option<NaiveDate>,
    pub opponent: Option<String>,
    #[schema(value_type = Option<String>)]
    pub result: Option<GameOutcome>,
    pub home_away: Option<String>,
    pub team_score: Option<i32>,
    pub opponent_score: Option<i32>,
    pub innings: Option<String>,
    pub notes: Option<String>,
}
