use chrono::NaiveDate;
use entity::member::{Grade, MemberRole, MemberStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct MemberDto {
    pub id: i32,
    pub user_id: Option<i32>,
    pub name: String,
    #[schema(value_type = String)]
    pub grade: Grade,
    pub position: Option<String>,
    pub uniform_number: Option<i32>,
    pub class_number: Option<String>,
    pub student_number: Option<i32>,
    pub kana: Option<String>,
    #[schema(value_type = String)]
    pub member_role: MemberRole,
    #[schema(value_type = String)]
    pub status: MemberStatus,
}

impl From<entity::member::Model> for MemberDto {
    fn from(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            grade: entity.grade,
            position: entity.position,
            uniform_number: entity.uniform_number,
            class_number: entity.class_number,
            student_number: entity.student_number,
            kana: entity.kana,
            member_role: entity.member_role,
            status: entity.status,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateMemberDto {
    pub name: String,
    #[schema(value_type = String)]
    pub grade: Grade,
    pub position: Option<String>,
    pub uniform_number: Option<i32>,
    pub class_number: Option<String>,
    pub student_number: Option<i32>,
    pub kana: Option<String>,
    #[schema(value_type = Option<String>)]
    pub member_role: Option<MemberRole>,
    pub user_id: Option<i32>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateMemberDto {
    pub name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub grade: Option<Grade>,
    pub position: Option<String>,
    pub uniform_number: Option<i32>,
    pub class_number: Option<String>,
    pub student_number: Option<i32>,
    pub kana: Option<String>,
    #[schema(value_type = Option<String>)]
    pub member_role: Option<MemberRole>,
    #[schema(value_type = Option<String>)]
    pub status: Option<MemberStatus>,
    pub user_id: Option<i32>,
}

#[derive(Deserialize)]
pub struct MemberListQuery {
    /// Defaults to true: retired members are hidden unless asked for.
    pub active_only: Option<bool>,
}

/// Everything known about one member, fetched concurrently.
#[derive(Serialize, ToSchema)]
pub struct MemberDetailDto {
    pub member: MemberDto,
    pub batting: Vec<super::stats::BattingStatDto>,
    pub pitching: Vec<super::stats::PitchingStatDto>,
    pub velocity: Vec<super::velocity::PitchVelocityDto>,
    pub exit_velocity: Vec<super::velocity::ExitVelocityDto>,
    pub pulldown: Vec<super::velocity::PulldownVelocityDto>,
    pub physical: Vec<super::physical::PhysicalMeasurementDto>,
}

/// Echo of the record date range filters used by several list endpoints.
#[derive(Deserialize)]
pub struct DateRangeQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn grade_outside_the_enum_is_rejected() {
        let result = serde_json::from_value::<CreateMemberDto>(json!({
            "name": "Test",
            "grade": "4"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn valid_member_payload_deserializes() {
        let dto = serde_json::from_value::<CreateMemberDto>(json!({
            "name": "Test",
            "grade": "1",
            "member_role": "manager"
        }))
        .unwrap();
        assert_eq!(dto.grade, Grade::First);
        assert_eq!(dto.member_role, Some(MemberRole::Manager));
    }
}
