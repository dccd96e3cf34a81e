//! Career summary over raw per-game records.

use sea_orm::DatabaseConnection;

use crate::{
    model::record::RecordSummaryDto,
    server::{data::player_record::PlayerRecordRepository, error::AppError, service::stats},
};

pub struct RecordService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecordService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sums every record row of the member and derives the career rates.
    ///
    /// A member with no rows gets the all-zero summary with `None` rates;
    /// this endpoint never fails just because nothing has been recorded yet.
    pub async fn summary(&self, member_id: i32) -> Result<RecordSummaryDto, AppError> {
        let totals = PlayerRecordRepository::new(self.db).summarize(member_id).await?;

        let at_bats = totals.at_bats.unwrap_or(0);
        let hits = totals.hits.unwrap_or(0);
        let doubles = totals.doubles.unwrap_or(0);
        let triples = totals.triples.unwrap_or(0);
        let home_runs = totals.home_runs.unwrap_or(0);
        let walks = totals.walks.unwrap_or(0);
        let innings_pitched = totals.innings_pitched.unwrap_or(0.0);
        let earned_runs = totals.earned_runs.unwrap_or(0);
        let pitch_walks = totals.pitch_walks.unwrap_or(0);
        let hits_allowed = totals.hits_allowed.unwrap_or(0);

        let total_bases = stats::total_bases(hits, doubles, triples, home_runs);
        let on_base = stats::on_base_percentage(hits, walks, at_bats);
        let slugging = stats::slugging(total_bases, at_bats);

        Ok(RecordSummaryDto {
            member_id,
            games: totals.games,
            at_bats,
            hits,
            doubles,
            triples,
            home_runs,
            rbis: totals.rbis.unwrap_or(0),
            runs: totals.runs.unwrap_or(0),
            strikeouts: totals.strikeouts.unwrap_or(0),
            walks,
            stolen_bases: totals.stolen_bases.unwrap_or(0),
            innings_pitched,
            earned_runs,
            pitch_strikeouts: totals.pitch_strikeouts.unwrap_or(0),
            pitch_walks,
            hits_allowed,
            wins: totals.wins.unwrap_or(0),
            losses: totals.losses.unwrap_or(0),
            batting_average: stats::batting_average(hits, at_bats),
            on_base_percentage: on_base,
            slugging_percentage: slugging,
            ops: stats::ops(on_base, slugging),
            era: stats::era(earned_runs, innings_pitched),
            whip: stats::whip(pitch_walks, hits_allowed, innings_pitched),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{
        builder::TestBuilder,
        factory::{member::create_member, player_record::PlayerRecordFactory},
    };

    /// A member with no record rows gets a zero summary, not an error and
    /// not NaN rates.
    #[tokio::test]
    async fn empty_member_gets_zero_summary() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Member)
            .with_table(entity::prelude::PlayerRecord)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let member = create_member(db).await.unwrap();

        let summary = RecordService::new(db).summary(member.id).await.unwrap();

        assert_eq!(summary.games, 0);
        assert_eq!(summary.at_bats, 0);
        assert_eq!(summary.batting_average, None);
        assert_eq!(summary.era, None);
        assert_eq!(summary.whip, None);
    }

    #[tokio::test]
    async fn derives_rates_from_summed_rows() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Member)
            .with_table(entity::prelude::PlayerRecord)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let member = create_member(db).await.unwrap();
        PlayerRecordFactory::new(db, member.id)
            .batting(4, 2)
            .pitching(6.0, 2)
            .pitching_baserunners(1, 5)
            .build()
            .await
            .unwrap();
        PlayerRecordFactory::new(db, member.id)
            .batting(4, 1)
            .pitching(3.0, 1)
            .pitching_baserunners(2, 4)
            .build()
            .await
            .unwrap();

        let summary = RecordService::new(db).summary(member.id).await.unwrap();

        assert_eq!(summary.games, 2);
        assert_eq!(summary.at_bats, 8);
        assert_eq!(summary.hits, 3);
        assert_eq!(summary.batting_average, Some(0.375));
        // 3 earned runs over 9 innings.
        assert_eq!(summary.era, Some(3.0));
        // 3 walks + 9 hits over 9 innings.
        assert_eq!(summary.whip, Some(12.0 / 9.0));
    }
}
