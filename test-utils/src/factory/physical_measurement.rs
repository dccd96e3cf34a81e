//! Physical measurement helper.

use chrono::{NaiveDate, Utc};
use entity::physical_measurement::PhysicalCategory;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn create_measurement(
    db: &DatabaseConnection,
    member_id: i32,
    category: PhysicalCategory,
    measure_date: NaiveDate,
    value: f64,
) -> Result<entity::physical_measurement::Model, DbErr> {
    entity::physical_measurement::ActiveModel {
        member_id: ActiveValue::Set(member_id),
        measure_date: ActiveValue::Set(measure_date),
        category: ActiveValue::Set(category),
        value: ActiveValue::Set(Some(value)),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
