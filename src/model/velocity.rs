use chrono::NaiveDate;
use entity::member::Grade;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PitchVelocityDto {
    pub id: i32,
    pub member_id: i32,
    pub avg_fastball: Option<f64>,
    pub avg_breaking: Option<f64>,
    pub max_fastball: Option<f64>,
    pub max_breaking: Option<f64>,
}

impl From<entity::pitch_velocity::Model> for PitchVelocityDto {
    fn from(entity: entity::pitch_velocity::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            avg_fastball: entity.avg_fastball,
            avg_breaking: entity.avg_breaking,
            max_fastball: entity.max_fastball,
            max_breaking: entity.max_breaking,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ExitVelocityDto {
    pub id: i32,
    pub member_id: i32,
    pub measure_date: Option<NaiveDate>,
    pub avg_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub avg_rank: Option<i32>,
    pub max_rank: Option<i32>,
}

impl From<entity::exit_velocity::Model> for ExitVelocityDto {
    fn from(entity: entity::exit_velocity::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            measure_date: entity.measure_date,
            avg_speed: entity.avg_speed,
            max_speed: entity.max_speed,
            avg_rank: entity.avg_rank,
            max_rank: entity.max_rank,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PulldownVelocityDto {
    pub id: i32,
    pub member_id: i32,
    pub measure_date: Option<NaiveDate>,
    pub avg_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub avg_rank: Option<i32>,
    pub max_rank: Option<i32>,
}

impl From<entity::pulldown_velocity::Model> for PulldownVelocityDto {
    fn from(entity: entity::pulldown_velocity::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            measure_date: entity.measure_date,
            avg_speed: entity.avg_speed,
            max_speed: entity.max_speed,
            avg_rank: entity.avg_rank,
            max_rank: entity.max_rank,
        }
    }
}

/// Velocity rows joined with roster info for the team-wide tables.
#[derive(Serialize, ToSchema)]
pub struct PitchVelocityRowDto {
    pub member_name: String,
    #[schema(value_type = String)]
    pub grade: Grade,
    #[serde(flatten)]
    pub measurement: PitchVelocityDto,
}

#[derive(Serialize, ToSchema)]
pub struct ExitVelocityRowDto {
    pub member_name: String,
    #[schema(value_type = String)]
    pub grade: Grade,
    #[serde(flatten)]
    pub measurement: ExitVelocityDto,
}

#[derive(Serialize, ToSchema)]
pub struct PulldownVelocityRowDto {
    pub member_name: String,
    #[schema(value_type = String)]
    pub grade: Grade,
    #[serde(flatten)]
    pub measurement: PulldownVelocityDto,
}

#[derive(Deserialize, ToSchema)]
pub struct CreatePitchVelocityDto {
    pub member_id: i32,
    pub avg_fastball: Option<f64>,
    pub avg_breaking: Option<f64>,
    pub max_fastball: Option<f64>,
    pub max_breaking: Option<f64>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateExitVelocityDto {
    pub member_id: i32,
    pub measure_date: Option<NaiveDate>,
    pub avg_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub avg_rank: Option<i32>,
    pub max_rank: Option<i32>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreatePulldownVelocityDto {
    pub member_id: i32,
    pub measure_date: Option<NaiveDate>,
    pub avg_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub avg_rank: Option<i32>,
    pub max_rank: Option<i32>,
}
