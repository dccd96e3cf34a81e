//! Batting snapshot service: derives rates on read and orders the
//! leaderboard by them.

use sea_orm::DatabaseConnection;

use crate::{
    model::stats::{BattingLeaderboardRowDto, BattingStatDto, CreateBattingStatDto},
    server::{
        data::{batting_stat::BattingStatRepository, member::MemberRepository},
        error::AppError,
        service::stats,
    },
};

pub struct BattingStatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BattingStatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Converts a stored snapshot into its response shape, deriving every
    /// rate from the counting columns.
    pub fn dto(model: entity::batting_stat::Model) -> BattingStatDto {
        let on_base = stats::on_base_percentage(
            model.hits as i64,
            model.walks as i64,
            model.at_bats as i64,
        );
        let slugging = stats::slugging(model.total_bases as i64, model.at_bats as i64);

        BattingStatDto {
            batting_average: stats::batting_average(model.hits as i64, model.at_bats as i64),
            on_base_percentage: on_base,
            slugging_percentage: slugging,
            ops: stats::ops(on_base, slugging),
            vs_left_average: stats::batting_average(
                model.vs_left_hits as i64,
                model.vs_left_at_bats as i64,
            ),
            vs_right_average: stats::batting_average(
                model.vs_right_hits as i64,
                model.vs_right_at_bats as i64,
            ),
            id: model.id,
            member_id: model.member_id,
            period: model.period,
            games: model.games,
            plate_appearances: model.plate_appearances,
            at_bats: model.at_bats,
            runs: model.runs,
            hits: model.hits,
            singles: model.singles,
            doubles: model.doubles,
            triples: model.triples,
            home_runs: model.home_runs,
            total_bases: model.total_bases,
            rbis: model.rbis,
            stolen_base_attempts: model.stolen_base_attempts,
            stolen_bases: model.stolen_bases,
            sacrifice_bunts: model.sacrifice_bunts,
            sacrifice_flies: model.sacrifice_flies,
            walks: model.walks,
            strikeouts: model.strikeouts,
            errors: model.errors,
            vs_left_at_bats: model.vs_left_at_bats,
            vs_left_hits: model.vs_left_hits,
            vs_right_at_bats: model.vs_right_at_bats,
            vs_right_hits: model.vs_right_hits,
        }
    }

    /// Team-wide leaderboard, best derived batting average first; rows
    /// without an average sort last.
    pub async fn list(&self) -> Result<Vec<BattingLeaderboardRowDto>, AppError> {
        let rows = BattingStatRepository::new(self.db).list_with_members().await?;

        let mut rows: Vec<BattingLeaderboardRowDto> = rows
            .into_iter()
            .filter_map(|(stat, member)| {
                member.map(|member| BattingLeaderboardRowDto {
                    member_name: member.name,
                    grade: member.grade,
                    position: member.position,
                    uniform_number: member.uniform_number,
                    stat: Self::dto(stat),
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            let key = |row: &BattingLeaderboardRowDto| row.stat.batting_average.unwrap_or(-1.0);
            key(b).total_cmp(&key(a))
        });

        Ok(rows)
    }

    pub async fn by_member(&self, member_id: i32) -> Result<Vec<BattingStatDto>, AppError> {
        let rows = BattingStatRepository::new(self.db).by_member(member_id).await?;
        Ok(rows.into_iter().map(Self::dto).collect())
    }

    /// Imports a snapshot for an existing member.
    pub async fn create(&self, dto: &CreateBattingStatDto) -> Result<BattingStatDto, AppError> {
        if MemberRepository::new(self.db)
            .get_by_id(dto.member_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Member {} not found",
                dto.member_id
            )));
        }

        let created = BattingStatRepository::new(self.db).create(dto).await?;
        Ok(Self::dto(created))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{
        builder::TestBuilder,
        factory::{batting_stat::BattingStatFactory, member::MemberFactory},
    };

    /// The leaderboard orders by the derived average, members without
    /// at-bats last.
    #[tokio::test]
    async fn leaderboard_orders_by_derived_average() {
        let test = TestBuilder::new().with_stats_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let low = MemberFactory::new(db).name("Low").build().await.unwrap();
        let high = MemberFactory::new(db).name("High").build().await.unwrap();
        let empty = MemberFactory::new(db).name("Empty").build().await.unwrap();

        BattingStatFactory::new(db, low.id).batting(40, 10).build().await.unwrap();
        BattingStatFactory::new(db, high.id).batting(50, 20).build().await.unwrap();
        BattingStatFactory::new(db, empty.id).build().await.unwrap();

        let rows = BattingStatsService::new(db).list().await.unwrap();

        let names: Vec<&str> = rows.iter().map(|r| r.member_name.as_str()).collect();
        assert_eq!(names, vec!["High", "Low", "Empty"]);
        assert_eq!(rows[0].stat.batting_average, Some(0.4));
        assert_eq!(rows[2].stat.batting_average, None);
    }

    /// Split averages derive from the split counting columns.
    #[tokio::test]
    async fn derives_split_averages() {
        let test = TestBuilder::new().with_stats_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let member = MemberFactory::new(db).build().await.unwrap();
        BattingStatFactory::new(db, member.id)
            .batting(40, 10)
            .splits(10, 4, 30, 6)
            .build()
            .await
            .unwrap();

        let stats = BattingStatsService::new(db).by_member(member.id).await.unwrap();

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].vs_left_average, Some(0.4));
        assert_eq!(stats[0].vs_right_average, Some(0.2));
    }

    #[tokio::test]
    async fn create_rejects_unknown_member() {
        let test = TestBuilder::new().with_stats_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = BattingStatsService::new(db)
            .create(&crate::model::stats::CreateBattingStatDto {
                member_id: 4711,
                period: None,
                games: 0,
                plate_appearances: 0,
                at_bats: 0,
                runs: 0,
                hits: 0,
                singles: 0,
                doubles: 0,
                triples: 0,
                home_runs: 0,
                total_bases: 0,
                rbis: 0,
                stolen_base_attempts: 0,
                stolen_bases: 0,
                sacrifice_bunts: 0,
                sacrifice_flies: 0,
                walks: 0,
                strikeouts: 0,
                errors: 0,
                vs_left_at_bats: 0,
                vs_left_hits: 0,
                vs_right_at_bats: 0,
                vs_right_hits: 0,
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
