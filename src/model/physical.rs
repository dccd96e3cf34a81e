use chrono::NaiveDate;
use entity::member::Grade;
use entity::physical_measurement::PhysicalCategory;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PhysicalMeasurementDto {
    pub id: i32,
    pub member_id: i32,
    pub measure_date: NaiveDate,
    #[schema(value_type = String)]
    pub category: PhysicalCategory,
    pub value: Option<f64>,
}

impl From<entity::physical_measurement::Model> for PhysicalMeasurementDto {
    fn from(entity: entity::physical_measurement::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            measure_date: entity.measure_date,
            category: entity.category,
            value: entity.value,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct PhysicalRowDto {
    pub member_name: String,
    #[schema(value_type = String)]
    pub grade: Grade,
    #[serde(flatten)]
    pub measurement: PhysicalMeasurementDto,
}

#[derive(Deserialize, ToSchema)]
pub struct CreatePhysicalDto {
    pub member_id: i32,
    pub measure_date: NaiveDate,
    #[schema(value_type = String)]
    pub category: PhysicalCategory,
    pub value: Option<f64>,
}

#[derive(Deserialize)]
pub struct PhysicalListQuery {
    pub category: PhysicalCategory,
}

#[derive(Deserialize)]
pub struct PhysicalByMemberQuery {
    pub category: Option<PhysicalCategory>,
}

/// One normalized score per category: the latest measurement relative to the
/// hardcoded league average, scaled to 100. Sprint inverts the ratio because
/// a lower time is better. Missing data scores zero.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PhysicalScoreDto {
    #[schema(value_type = String)]
    pub category: PhysicalCategory,
    pub value: Option<f64>,
    pub measured_on: Option<NaiveDate>,
    pub score: i32,
}
