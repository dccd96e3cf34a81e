//! Calendar event for the club: practice, game, meeting or other.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[sea_orm(string_value = "practice")]
    Practice,
    #[sea_orm(string_value = "game")]
    Game,
    #[sea_orm(string_value = "meeting")]
    Meeting,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "schedule")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub event_type: EventType,
    pub event_date: Date,
    /// Display times like "09:00"; free-form on purpose.
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub uniform: Option<String>,
    pub created_by: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(has_many = "super::absence::Entity")]
    Absence,
    #[sea_orm(has_many = "super::practice_menu::Entity")]
    PracticeMenu,
}

impl Related<super::absence::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Absence.def()
    }
}

impl Related<super::practice_menu::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PracticeMenu.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
