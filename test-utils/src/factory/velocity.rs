//! Velocity measurement helpers.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn create_pitch_velocity(
    db: &DatabaseConnection,
    member_id: i32,
    avg_fastball: f64,
    max_fastball: f64,
) -> Result<entity::pitch_velocity::Model, DbErr> {
    entity::pitch_velocity::ActiveModel {
        member_id: ActiveValue::Set(member_id),
        avg_fastball: ActiveValue::Set(Some(avg_fastball)),
        avg_breaking: ActiveValue::Set(None),
        max_fastball: ActiveValue::Set(Some(max_fastball)),
        max_breaking: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_exit_velocity(
    db: &DatabaseConnection,
    member_id: i32,
    avg_speed: f64,
    max_speed: f64,
) -> Result<entity::exit_velocity::Model, DbErr> {
    entity::exit_velocity::ActiveModel {
        member_id: ActiveValue::Set(member_id),
        measure_date: ActiveValue::Set(None),
        avg_speed: ActiveValue::Set(Some(avg_speed)),
        max_speed: ActiveValue::Set(Some(max_speed)),
        avg_rank: ActiveValue::Set(None),
        max_rank: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_pulldown_velocity(
    db: &DatabaseConnection,
    member_id: i32,
    avg_speed: f64,
    max_speed: f64,
) -> Result<entity::pulldown_velocity::Model, DbErr> {
    entity::pulldown_velocity::ActiveModel {
        member_id: ActiveValue::Set(member_id),
        measure_date: ActiveValue::Set(None),
        avg_speed: ActiveValue::Set(Some(avg_speed)),
        max_speed: ActiveValue::Set(Some(max_speed)),
        avg_rank: ActiveValue::Set(None),
        max_rank: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
