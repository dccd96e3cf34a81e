use entity::practice_menu::MenuCategory;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PracticeMenuDto {
    pub id: i32,
    pub schedule_id: Option<i32>,
    #[schema(value_type = String)]
    pub category: MenuCategory,
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub target_group: Option<String>,
}

impl From<entity::practice_menu::Model> for PracticeMenuDto {
    fn from(entity: entity::practice_menu::Model) -> Self {
        Self {
            id: entity.id,
            schedule_id: entity.schedule_id,
            category: entity.category,
            title: entity.title,
            description: entity.description,
            duration: entity.duration,
            target_group: entity.target_group,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateMenuDto {
    pub schedule_id: Option<i32>,
    #[schema(value_type = String)]
    pub category: MenuCategory,
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub target_group: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateMenuDto {
    pub schedule_id: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub category: Option<MenuCategory>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub target_group: Option<String>,
}

#[derive(Deserialize)]
pub struct MenuListQuery {
    pub schedule_id: Option<i32>,
}
