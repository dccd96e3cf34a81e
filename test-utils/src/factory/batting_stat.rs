//! Batting snapshot factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for batting snapshots; counting columns default to zero.
pub struct BattingStatFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    period: Option<String>,
    games: i32,
    plate_appearances: i32,
    at_bats: i32,
    hits: i32,
    doubles: i32,
    triples: i32,
    home_runs: i32,
    total_bases: i32,
    walks: i32,
    strikeouts: i32,
    vs_left_at_bats: i32,
    vs_left_hits: i32,
    vs_right_at_bats: i32,
    vs_right_hits: i32,
}

impl<'a> BattingStatFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, member_id: i32) -> Self {
        Self {
            db,
            member_id,
            period: None,
            games: 0,
            plate_appearances: 0,
            at_bats: 0,
            hits: 0,
            doubles: 0,
            triples: 0,
            home_runs: 0,
            total_bases: 0,
            walks: 0,
            strikeouts: 0,
            vs_left_at_bats: 0,
            vs_left_hits: 0,
            vs_right_at_bats: 0,
            vs_right_hits: 0,
        }
    }

    pub fn period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    pub fn games(mut self, games: i32) -> Self {
        self.games = games;
        self
    }

    pub fn batting(mut self, at_bats: i32, hits: i32) -> Self {
        self.at_bats = at_bats;
        self.hits = hits;
        self
    }

    pub fn total_bases(mut self, total_bases: i32) -> Self {
        self.total_bases = total_bases;
        self
    }

    pub fn walks(mut self, walks: i32) -> Self {
        self.walks = walks;
        self
    }

    pub fn splits(
        mut self,
        vs_left_at_bats: i32,
        vs_left_hits: i32,
        vs_right_at_bats: i32,
        vs_right_hits: i32,
    ) -> Self {
        self.vs_left_at_bats = vs_left_at_bats;
        self.vs_left_hits = vs_left_hits;
        self.vs_right_at_bats = vs_right_at_bats;
        self.vs_right_hits = vs_right_hits;
        self
    }

    pub async fn build(self) -> Result<entity::batting_stat::Model, DbErr> {
        let now = Utc::now();
        entity::batting_stat::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            period: ActiveValue::Set(self.period),
            games: ActiveValue::Set(self.games),
            plate_appearances: ActiveValue::Set(self.plate_appearances),
            at_bats: ActiveValue::Set(self.at_bats),
            runs: ActiveValue::Set(0),
            hits: ActiveValue::Set(self.hits),
            singles: ActiveValue::Set(0),
            doubles: ActiveValue::Set(self.doubles),
            triples: ActiveValue::Set(self.triples),
            home_runs: ActiveValue::Set(self.home_runs),
            total_bases: ActiveValue::Set(self.total_bases),
            rbis: ActiveValue::Set(0),
            stolen_base_attempts: ActiveValue::Set(0),
            stolen_bases: ActiveValue::Set(0),
            sacrifice_bunts: ActiveValue::Set(0),
            sacrifice_flies: ActiveValue::Set(0),
            walks: ActiveValue::Set(self.walks),
            strikeouts: ActiveValue::Set(self.strikeouts),
            errors: ActiveValue::Set(0),
            vs_left_at_bats: ActiveValue::Set(self.vs_left_at_bats),
            vs_left_hits: ActiveValue::Set(self.vs_left_hits),
            vs_right_at_bats: ActiveValue::Set(self.vs_right_at_bats),
            vs_right_hits: ActiveValue::Set(self.vs_right_hits),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a snapshot with just at-bats and hits set, the minimum a batting
/// average needs.
pub async fn create_batting_stat(
    db: &DatabaseConnection,
    member_id: i32,
    at_bats: i32,
    hits: i32,
) -> Result<entity::batting_stat::Model, DbErr> {
    BattingStatFactory::new(db, member_id)
        .batting(at_bats, hits)
        .build()
        .await
}
