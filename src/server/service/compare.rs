//! Multi-member comparison.

use sea_orm::DatabaseConnection;

use crate::{
    model::compare::MemberComparisonDto,
    server::{
        data::{
            batting_stat::BattingStatRepository, member::MemberRepository,
            physical::PhysicalRepository, pitching_stat::PitchingStatRepository,
            velocity::VelocityRepository,
        },
        error::AppError,
        service::{batting::BattingStatsService, pitching::PitchingStatsService},
    },
};

/// Inclusive bounds on how many members one comparison may cover.
pub const MIN_COMPARE_MEMBERS: usize = 2;
pub const MAX_COMPARE_MEMBERS: usize = 6;

pub struct CompareService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompareService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds one aggregate per requested member, in request order.
    ///
    /// The cardinality bound is checked before any query runs. Per member the
    /// latest row of each stat table is fetched concurrently with
    /// all-or-nothing semantics: one failed sub-fetch (or an unknown member
    /// id) fails the whole comparison.
    pub async fn compare(&self, member_ids: &[i32]) -> Result<Vec<MemberComparisonDto>, AppError> {
        if member_ids.len() < MIN_COMPARE_MEMBERS || member_ids.len() > MAX_COMPARE_MEMBERS {
            return Err(AppError::BadRequest(format!(
                "Comparison requires between {} and {} members, got {}",
                MIN_COMPARE_MEMBERS,
                MAX_COMPARE_MEMBERS,
                member_ids.len()
            )));
        }

        let mut comparisons = Vec::with_capacity(member_ids.len());
        for &member_id in member_ids {
            comparisons.push(self.compare_one(member_id).await?);
        }

        Ok(comparisons)
    }

    async fn compare_one(&self, member_id: i32) -> Result<MemberComparisonDto, AppError> {
        let member_repo = MemberRepository::new(self.db);
        let batting_repo = BattingStatRepository::new(self.db);
        let pitching_repo = PitchingStatRepository::new(self.db);
        let velocity_repo = VelocityRepository::new(self.db);
        let physical_repo = PhysicalRepository::new(self.db);

        let (member, batting, pitching, velocity, exit_velocity, pulldown, physical) = tokio::try_join!(
            member_repo.get_by_id(member_id),
            batting_repo.latest_for_member(member_id),
            pitching_repo.latest_for_member(member_id),
            velocity_repo.latest_pitch_for_member(member_id),
            velocity_repo.latest_exit_for_member(member_id),
            velocity_repo.latest_pulldown_for_member(member_id),
            physical_repo.by_member(member_id, None),
        )?;

        let member =
            member.ok_or_else(|| AppError::NotFound(format!("Member {} not found", member_id)))?;

        Ok(MemberComparisonDto {
            member: member.into(),
            batting: batting.map(BattingStatsService::dto),
            pitching: pitching.map(PitchingStatsService::dto),
            velocity: velocity.map(Into::into),
            exit_velocity: exit_velocity.map(Into::into),
            pulldown: pulldown.map(Into::into),
            physical: physical.into_iter().map(Into::into).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{
        builder::TestBuilder,
        factory::{batting_stat::create_batting_stat, member::create_member},
    };

    #[tokio::test]
    async fn rejects_out_of_bounds_cardinality() {
        let test = TestBuilder::new().with_stats_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = CompareService::new(db);

        let one = service.compare(&[1]).await;
        assert!(matches!(one, Err(AppError::BadRequest(_))));

        let seven = service.compare(&[1, 2, 3, 4, 5, 6, 7]).await;
        assert!(matches!(seven, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn unknown_member_fails_the_whole_comparison() {
        let test = TestBuilder::new().with_stats_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let member = create_member(db).await.unwrap();

        let result = CompareService::new(db).compare(&[member.id, 4711]).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    /// Two members with known batting totals come back in request order with
    /// the averages derived from those totals.
    #[tokio::test]
    async fn derives_batting_averages_in_request_order() {
        let test = TestBuilder::new().with_stats_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let member_a = create_member(db).await.unwrap();
        let member_b = create_member(db).await.unwrap();
        create_batting_stat(db, member_a.id, 40, 10).await.unwrap();
        create_batting_stat(db, member_b.id, 50, 20).await.unwrap();

        let comparisons = CompareService::new(db)
            .compare(&[member_a.id, member_b.id])
            .await
            .unwrap();

        assert_eq!(comparisons.len(), 2);
        assert_eq!(comparisons[0].member.id, member_a.id);
        assert_eq!(comparisons[1].member.id, member_b.id);
        assert_eq!(
            comparisons[0].batting.as_ref().unwrap().batting_average,
            Some(0.25)
        );
        assert_eq!(
            comparisons[1].batting.as_ref().unwrap().batting_average,
            Some(0.4)
        );

        // Members without pitching or velocity data come back with empty
        // slots, not errors.
        assert!(comparisons[0].pitching.is_none());
        assert!(comparisons[0].velocity.is_none());
        assert!(comparisons[0].physical.is_empty());
    }
}
