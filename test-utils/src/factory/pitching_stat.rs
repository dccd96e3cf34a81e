//! Pitching snapshot factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PitchingStatFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    period: Option<String>,
    games: i32,
    innings_pitched: f64,
    batters_faced: i32,
    hits_allowed: i32,
    walks: i32,
    strikeouts: i32,
    earned_runs: i32,
    first_pitch_strikes: i32,
}

impl<'a> PitchingStatFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, member_id: i32) -> Self {
        Self {
            db,
            member_id,
            period: None,
            games: 0,
            innings_pitched: 0.0,
            batters_faced: 0,
            hits_allowed: 0,
            walks: 0,
            strikeouts: 0,
            earned_runs: 0,
            first_pitch_strikes: 0,
        }
    }

    pub fn games(mut self, games: i32) -> Self {
        self.games = games;
        self
    }

    pub fn workload(mut self, innings_pitched: f64, batters_faced: i32) -> Self {
        self.innings_pitched = innings_pitched;
        self.batters_faced = batters_faced;
        self
    }

    pub fn outcomes(mut self, earned_runs: i32, hits_allowed: i32, walks: i32) -> Self {
        self.earned_runs = earned_runs;
        self.hits_allowed = hits_allowed;
        self.walks = walks;
        self
    }

    pub fn strikeouts(mut self, strikeouts: i32) -> Self {
        self.strikeouts = strikeouts;
        self
    }

    pub fn first_pitch_strikes(mut self, first_pitch_strikes: i32) -> Self {
        self.first_pitch_strikes = first_pitch_strikes;
        self
    }

    pub async fn build(self) -> Result<entity::pitching_stat::Model, DbErr> {
        let now = Utc::now();
        entity::pitching_stat::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            period: ActiveValue::Set(self.period),
            games: ActiveValue::Set(self.games),
            innings_pitched: ActiveValue::Set(self.innings_pitched),
            batters_faced: ActiveValue::Set(self.batters_faced),
            hits_allowed: ActiveValue::Set(self.hits_allowed),
            home_runs_allowed: ActiveValue::Set(0),
            walks: ActiveValue::Set(self.walks),
            strikeouts: ActiveValue::Set(self.strikeouts),
            earned_runs: ActiveValue::Set(self.earned_runs),
            runs_allowed: ActiveValue::Set(0),
            first_pitch_strikes: ActiveValue::Set(self.first_pitch_strikes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
