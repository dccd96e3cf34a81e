use chrono::NaiveDate;
use entity::schedule::EventType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ScheduleDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    #[schema(value_type = String)]
    pub event_type: EventType,
    pub event_date: NaiveDate,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub uniform: Option<String>,
    pub created_by: Option<i32>,
}

impl From<entity::schedule::Model> for ScheduleDto {
    fn from(entity: entity::schedule::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            event_type: entity.event_type,
            event_date: entity.event_date,
            start_time: entity.start_time,
            end_time: entity.end_time,
            location: entity.location,
            uniform: entity.uniform,
            created_by: entity.created_by,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateScheduleDto {
    pub title: String,
    pub description: Option<String>,
    #[schema(value_type = Option<String>)]
    pub event_type: Option<EventType>,
    pub event_date: NaiveDate,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub uniform: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateScheduleDto {
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>)]
    pub event_type: Option<EventType>,
    pub event_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub uniform: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_type_outside_the_enum_is_rejected() {
        let result = serde_json::from_value::<CreateScheduleDto>(json!({
            "title": "Test",
            "event_date": "2026-02-10",
            "event_type": "festival"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn event_date_must_be_a_date() {
        let result = serde_json::from_value::<CreateScheduleDto>(json!({
            "title": "Test",
            "event_date": "not-a-date"
        }));
        assert!(result.is_err());
    }
}
