//! Scalar physical measurement per member, date and category.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum PhysicalCategory {
    /// 27 m sprint, seconds; lower is better.
    #[sea_orm(string_value = "sprint_27m")]
    Sprint27m,
    /// Bench press, kg.
    #[sea_orm(string_value = "bench_press")]
    BenchPress,
    /// Power clean, kg.
    #[sea_orm(string_value = "clean")]
    Clean,
    /// Deadlift, kg.
    #[sea_orm(string_value = "deadlift")]
    Deadlift,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "physical_measurement")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub member_id: i32,
    pub measure_date: Date,
    pub category: PhysicalCategory,
    pub value: Option<f64>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Member,
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
