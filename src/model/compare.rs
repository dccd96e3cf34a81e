use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    member::MemberDto,
    physical::PhysicalMeasurementDto,
    stats::{BattingStatDto, PitchingStatDto},
    velocity::{ExitVelocityDto, PitchVelocityDto, PulldownVelocityDto},
};

/// Comparison request; between 2 and 6 member ids, compared in the order
/// they are given.
#[derive(Deserialize, ToSchema)]
pub struct CompareRequestDto {
    pub member_ids: Vec<i32>,
}

/// Latest snapshot of everything measurable about one member.
#[derive(Serialize, ToSchema)]
pub struct MemberComparisonDto {
    pub member: MemberDto,
    pub batting: Option<BattingStatDto>,
    pub pitching: Option<PitchingStatDto>,
    pub velocity: Option<PitchVelocityDto>,
    pub exit_velocity: Option<ExitVelocityDto>,
    pub pulldown: Option<PulldownVelocityDto>,
    pub physical: Vec<PhysicalMeasurementDto>,
}
