use entity::user::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    #[schema(value_type = String)]
    pub role: UserRole,
}

impl From<entity::user::Model> for UserDto {
    fn from(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: entity.role,
        }
    }
}
