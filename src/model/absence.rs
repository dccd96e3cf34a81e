use chrono::NaiveDate;
use entity::absence::AbsenceStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct AbsenceDto {
    pub id: i32,
    pub member_id: i32,
    pub schedule_id: Option<i32>,
    pub absence_date: NaiveDate,
    pub reason: Option<String>,
    #[schema(value_type = String)]
    pub status: AbsenceStatus,
}

impl From<entity::absence::Model> for AbsenceDto {
    fn from(entity: entity::absence::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            schedule_id: entity.schedule_id,
            absence_date: entity.absence_date,
            reason: entity.reason,
            status: entity.status,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateAbsenceDto {
    pub member_id: i32,
    pub schedule_id: Option<i32>,
    pub absence_date: NaiveDate,
    pub reason: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateAbsenceStatusDto {
    /// Target state; only `approved` and `noted` are accepted by the service.
    #[schema(value_type = String)]
    pub status: AbsenceStatus,
}

#[derive(Deserialize)]
pub struct AbsenceListQuery {
    pub schedule_id: Option<i32>,
    pub member_id: Option<i32>,
}
