//! Player record factory.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for raw per-game record rows. All counting stats default to zero;
/// set the ones the test cares about.
pub struct PlayerRecordFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    record_date: NaiveDate,
    at_bats: i32,
    hits: i32,
    doubles: i32,
    triples: i32,
    home_runs: i32,
    rbis: i32,
    runs: i32,
    strikeouts: i32,
    walks: i32,
    stolen_bases: i32,
    innings_pitched: f64,
    earned_runs: i32,
    pitch_strikeouts: i32,
    pitch_walks: i32,
    hits_allowed: i32,
    wins: i32,
    losses: i32,
}

impl<'a> PlayerRecordFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, member_id: i32) -> Self {
        Self {
            db,
            member_id,
            record_date: NaiveDate::from_ymd_opt(2026, 5, 10).expect("valid default date"),
            at_bats: 0,
            hits: 0,
            doubles: 0,
            triples: 0,
            home_runs: 0,
            rbis: 0,
            runs: 0,
            strikeouts: 0,
            walks: 0,
            stolen_bases: 0,
            innings_pitched: 0.0,
            earned_runs: 0,
            pitch_strikeouts: 0,
            pitch_walks: 0,
            hits_allowed: 0,
            wins: 0,
            losses: 0,
        }
    }

    pub fn record_date(mut self, record_date: NaiveDate) -> Self {
        self.record_date = record_date;
        self
    }

    pub fn batting(mut self, at_bats: i32, hits: i32) -> Self {
        self.at_bats = at_bats;
        self.hits = hits;
        self
    }

    pub fn extra_base_hits(mut self, doubles: i32, triples: i32, home_runs: i32) -> Self {
        self.doubles = doubles;
        self.triples = triples;
        self.home_runs = home_runs;
        self
    }

    pub fn walks(mut self, walks: i32) -> Self {
        self.walks = walks;
        self
    }

    pub fn rbis(mut self, rbis: i32) -> Self {
        self.rbis = rbis;
        self
    }

    pub fn pitching(mut self, innings_pitched: f64, earned_runs: i32) -> Self {
        self.innings_pitched = innings_pitched;
        self.earned_runs = earned_runs;
        self
    }

    pub fn pitching_baserunners(mut self, pitch_walks: i32, hits_allowed: i32) -> Self {
        self.pitch_walks = pitch_walks;
        self.hits_allowed = hits_allowed;
        self
    }

    pub async fn build(self) -> Result<entity::player_record::Model, DbErr> {
        let now = Utc::now();
        entity::player_record::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            record_date: ActiveValue::Set(self.record_date),
            at_bats: ActiveValue::Set(self.at_bats),
            hits: ActiveValue::Set(self.hits),
            doubles: ActiveValue::Set(self.doubles),
            triples: ActiveValue::Set(self.triples),
            home_runs: ActiveValue::Set(self.home_runs),
            rbis: ActiveValue::Set(self.rbis),
            runs: ActiveValue::Set(self.runs),
            strikeouts: ActiveValue::Set(self.strikeouts),
            walks: ActiveValue::Set(self.walks),
            stolen_bases: ActiveValue::Set(self.stolen_bases),
            innings_pitched: ActiveValue::Set(self.innings_pitched),
            earned_runs: ActiveValue::Set(self.earned_runs),
            pitch_strikeouts: ActiveValue::Set(self.pitch_strikeouts),
            pitch_walks: ActiveValue::Set(self.pitch_walks),
            hits_allowed: ActiveValue::Set(self.hits_allowed),
            wins: ActiveValue::Set(self.wins),
            losses: ActiveValue::Set(self.losses),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
