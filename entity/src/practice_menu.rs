//! Named drill or activity, optionally attached to a schedule entry.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    #[sea_orm(string_value = "batting")]
    Batting,
    #[sea_orm(string_value = "fielding")]
    Fielding,
    #[sea_orm(string_value = "pitching")]
    Pitching,
    #[sea_orm(string_value = "running")]
    Running,
    #[sea_orm(string_value = "conditioning")]
    Conditioning,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "practice_menu")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub schedule_id: Option<i32>,
    pub category: MenuCategory,
    pub title: String,
    pub description: Option<String>,
    /// Duration in minutes.
    pub duration: Option<i32>,
    pub target_group: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::schedule::Entity",
        from = "Column::ScheduleId",
        to = "super::schedule::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Schedule,
}

impl Related<super::schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
