//! Member detail aggregation.

use sea_orm::DatabaseConnection;

use crate::{
    model::member::MemberDetailDto,
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

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches the member plus every stat table in one concurrent sweep.
    ///
    /// The sub-queries are independent and only run in parallel for latency;
    /// any one of them failing fails the whole detail request.
    pub async fn full_detail(&self, member_id: i32) -> Result<MemberDetailDto, AppError> {
        let member_repo = MemberRepository::new(self.db);
        let batting_repo = BattingStatRepository::new(self.db);
        let pitching_repo = PitchingStatRepository::new(self.db);
        let velocity_repo = VelocityRepository::new(self.db);
        let physical_repo = PhysicalRepository::new(self.db);

        let (member, batting, pitching, velocity, exit_velocity, pulldown, physical) = tokio::try_join!(
            member_repo.get_by_id(member_id),
            batting_repo.by_member(member_id),
            pitching_repo.by_member(member_id),
            velocity_repo.pitch_by_member(member_id),
            velocity_repo.exit_by_member(member_id),
            velocity_repo.pulldown_by_member(member_id),
            physical_repo.by_member(member_id, None),
        )?;

        let member =
            member.ok_or_else(|| AppError::NotFound(format!("Member {} not found", member_id)))?;

        Ok(MemberDetailDto {
            member: member.into(),
            batting: batting.into_iter().map(BattingStatsService::dto).collect(),
            pitching: pitching.into_iter().map(PitchingStatsService::dto).collect(),
            velocity: velocity.into_iter().map(Into::into).collect(),
            exit_velocity: exit_velocity.into_iter().map(Into::into).collect(),
            pulldown: pulldown.into_iter().map(Into::into).collect(),
            physical: physical.into_iter().map(Into::into).collect(),
        })
    }
}
