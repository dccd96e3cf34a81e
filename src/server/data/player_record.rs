//! Raw per-game record repository, including the career totals aggregation.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::record::{CreateRecordDto, UpdateRecordDto};

/// Career totals summed in SQL over every record row of one member.
///
/// The sums are `NULL` when the member has no rows at all, which is why every
/// field except the count is optional; the service layer collapses that to a
/// zero summary.
#[derive(Debug, FromQueryResult)]
pub struct PlayerRecordTotals {
    pub games: i64,
    pub at_bats: Option<i64>,
    pub hits: Option<i64>,
    pub doubles: Option<i64>,
    pub triples: Option<i64>,
    pub home_runs: Option<i64>,
    pub rbis: Option<i64>,
    pub runs: Option<i64>,
    pub strikeouts: Option<i64>,
    pub walks: Option<i64>,
    pub stolen_bases: Option<i64>,
    pub innings_pitched: Option<f64>,
    pub earned_runs: Option<i64>,
    pub pitch_strikeouts: Option<i64>,
    pub pitch_walks: Option<i64>,
    pub hits_allowed: Option<i64>,
    pub wins: Option<i64>,
    pub losses: Option<i64>,
}

pub struct PlayerRecordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRecordRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a member's records chronologically in an optional date window.
    pub async fn list_for_member(
        &self,
        member_id: i32,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<entity::player_record::Model>, DbErr> {
        let mut query = entity::prelude::PlayerRecord::find()
            .filter(entity::player_record::Column::MemberId.eq(member_id))
            .order_by_asc(entity::player_record::Column::RecordDate);

        if let Some(from) = from {
            query = query.filter(entity::player_record::Column::RecordDate.gte(from));
        }
        if let Some(to) = to {
            query = query.filter(entity::player_record::Column::RecordDate.lte(to));
        }

        query.all(self.db).await
    }

    /// Sums every counting column for one member in a single query.
    pub async fn summarize(&self, member_id: i32) -> Result<PlayerRecordTotals, DbErr> {
        use entity::player_record::Column;

        let totals = entity::prelude::PlayerRecord::find()
            .select_only()
            .column_as(Column::Id.count(), "games")
            .column_as(Column::AtBats.sum(), "at_bats")
            .column_as(Column::Hits.sum(), "hits")
            .column_as(Column::Doubles.sum(), "doubles")
            .column_as(Column::Triples.sum(), "triples")
            .column_as(Column::HomeRuns.sum(), "home_runs")
            .column_as(Column::Rbis.sum(), "rbis")
            .column_as(Column::Runs.sum(), "runs")
            .column_as(Column::Strikeouts.sum(), "strikeouts")
            .column_as(Column::Walks.sum(), "walks")
            .column_as(Column::StolenBases.sum(), "stolen_bases")
            .column_as(Column::InningsPitched.sum(), "innings_pitched")
            .column_as(Column::EarnedRuns.sum(), "earned_runs")
            .column_as(Column::PitchStrikeouts.sum(), "pitch_strikeouts")
            .column_as(Column::PitchWalks.sum(), "pitch_walks")
            .column_as(Column::HitsAllowed.sum(), "hits_allowed")
            .column_as(Column::Wins.sum(), "wins")
            .column_as(Column::Losses.sum(), "losses")
            .filter(Column::MemberId.eq(member_id))
            .into_model::<PlayerRecordTotals>()
            .one(self.db)
            .await?;

        // An aggregate over zero rows still yields one row; treat a missing
        // row defensively as the empty summary anyway.
        Ok(totals.unwrap_or(PlayerRecordTotals {
            games: 0,
            at_bats: None,
            hits: None,
            doubles: None,
            triples: None,
            home_runs: None,
            rbis: None,
            runs: None,
            strikeouts: None,
            walks: None,
            stolen_bases: None,
            innings_pitched: None,
            earned_runs: None,
            pitch_strikeouts: None,
            pitch_walks: None,
            hits_allowed: None,
            wins: None,
            losses: None,
        }))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::player_record::Model>, DbErr> {
        entity::prelude::PlayerRecord::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        dto: &CreateRecordDto,
    ) -> Result<entity::player_record::Model, DbErr> {
        let now = Utc::now();
        entity::player_record::ActiveModel {
            member_id: ActiveValue::Set(dto.member_id),
            record_date: ActiveValue::Set(dto.record_date),
            at_bats: ActiveValue::Set(dto.at_bats),
            hits: ActiveValue::Set(dto.hits),
            doubles: ActiveValue::Set(dto.doubles),
            triples: ActiveValue::Set(dto.triples),
            home_runs: ActiveValue::Set(dto.home_runs),
            rbis: ActiveValue::Set(dto.rbis),
            runs: ActiveValue::Set(dto.runs),
            strikeouts: ActiveValue::Set(dto.strikeouts),
            walks: ActiveValue::Set(dto.walks),
            stolen_bases: ActiveValue::Set(dto.stolen_bases),
            innings_pitched: ActiveValue::Set(dto.innings_pitched),
            earned_runs: ActiveValue::Set(dto.earned_runs),
            pitch_strikeouts: ActiveValue::Set(dto.pitch_strikeouts),
            pitch_walks: ActiveValue::Set(dto.pitch_walks),
            hits_allowed: ActiveValue::Set(dto.hits_allowed),
            wins: ActiveValue::Set(dto.wins),
            losses: ActiveValue::Set(dto.losses),
            notes: ActiveValue::Set(dto.notes.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        dto: &UpdateRecordDto,
    ) -> Result<Option<entity::player_record::Model>, DbErr> {
        let Some(existing) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::player_record::ActiveModel = existing.into();
        if let Some(record_date) = dto.record_date {
            active.record_date = ActiveValue::Set(record_date);
        }
        if let Some(at_bats) = dto.at_bats {
            active.at_bats = ActiveValue::Set(at_bats);
        }
        if let Some(hits) = dto.hits {
            active.hits = ActiveValue::Set(hits);
        }
        if let Some(doubles) = dto.doubles {
            active.doubles = ActiveValue::Set(doubles);
        }
        if let Some(triples) = dto.triples {
            active.triples = ActiveValue::Set(triples);
        }
        if let Some(home_runs) = dto.home_runs {
            active.home_runs = ActiveValue::Set(home_runs);
        }
        if let Some(rbis) = dto.rbis {
            active.rbis = ActiveValue::Set(rbis);
        }
        if let Some(runs) = dto.runs {
            active.runs = ActiveValue::Set(runs);
        }
        if let Some(strikeouts) = dto.strikeouts {
            active.strikeouts = ActiveValue::Set(strikeouts);
        }
        if let Some(walks) = dto.walks {
            active.walks = ActiveValue::Set(walks);
        }
        if let Some(stolen_bases) = dto.stolen_bases {
            active.stolen_bases = ActiveValue::Set(stolen_bases);
        }
        if let Some(innings_pitched) = dto.innings_pitched {
            active.innings_pitched = ActiveValue::Set(innings_pitched);
        }
        if let Some(earned_runs) = dto.earned_runs {
            active.earned_runs = ActiveValue::Set(earned_runs);
        }
        if let Some(pitch_strikeouts) = dto.pitch_strikeouts {
            active.pitch_strikeouts = ActiveValue::Set(pitch_strikeouts);
        }
        if let Some(pitch_walks) = dto.pitch_walks {
            active.pitch_walks = ActiveValue::Set(pitch_walks);
        }
        if let Some(hits_allowed) = dto.hits_allowed {
            active.hits_allowed = ActiveValue::Set(hits_allowed);
        }
        if let Some(wins) = dto.wins {
            active.wins = ActiveValue::Set(wins);
        }
        if let Some(losses) = dto.losses {
            active.losses = ActiveValue::Set(losses);
        }
        if let Some(notes) = &dto.notes {
            active.notes = ActiveValue::Set(Some(notes.clone()));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PlayerRecord::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
