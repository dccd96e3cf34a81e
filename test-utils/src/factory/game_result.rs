//! Game result factory.

use chrono::{NaiveDate, Utc};
use entity::game_result::GameOutcome;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

pub struct GameResultFactory<'a> {
    db: &'a DatabaseConnection,
    game_number: Option<i32>,
    game_date: NaiveDate,
    opponent: String,
    result: GameOutcome,
    team_score: Option<i32>,
    opponent_score: Option<i32>,
}

impl<'a> GameResultFactory<'a> {
    /// Defaults: a 5-2 win on 2026-05-10 against a uniquely named opponent.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            game_number: None,
            game_date: NaiveDate::from_ymd_opt(2026, 5, 10).expect("valid default date"),
            opponent: format!("Opponent {}", next_id()),
            result: GameOutcome::Win,
            team_score: Some(5),
            opponent_score: Some(2),
        }
    }

    pub fn game_number(mut self, game_number: i32) -> Self {
        self.game_number = Some(game_number);
        self
    }

    pub fn game_date(mut self, game_date: NaiveDate) -> Self {
        self.game_date = game_date;
        self
    }

    pub fn opponent(mut self, opponent: impl Into<String>) -> Self {
        self.opponent = opponent.into();
        self
    }

    pub fn result(mut self, result: GameOutcome) -> Self {
        self.result = result;
        self
    }

    pub fn score(mut self, team_score: i32, opponent_score: i32) -> Self {
        self.team_score = Some(team_score);
        self.opponent_score = Some(opponent_score);
        self
    }

    pub fn no_score(mut self) -> Self {
        self.team_score = None;
        self.opponent_score = None;
        self
    }

    pub async fn build(self) -> Result<entity::game_result::Model, DbErr> {
        entity::game_result::ActiveModel {
            game_number: ActiveValue::Set(self.game_number),
            game_date: ActiveValue::Set(self.game_date),
            opponent: ActiveValue::Set(self.opponent),
            result: ActiveValue::Set(self.result),
            home_away: ActiveValue::Set(None),
            team_score: ActiveValue::Set(self.team_score),
            opponent_score: ActiveValue::Set(self.opponent_score),
            innings: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with the given date and outcome, default score.
pub async fn create_game(
    db: &DatabaseConnection,
    game_date: NaiveDate,
    result: GameOutcome,
) -> Result<entity::game_result::Model, DbErr> {
    GameResultFactory::new(db)
        .game_date(game_date)
        .result(result)
        .build()
        .await
}
