//! Club roster entry.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// School year of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(4))")]
pub enum Grade {
    #[sea_orm(string_value = "1")]
    #[serde(rename = "1")]
    First,
    #[sea_orm(string_value = "2")]
    #[serde(rename = "2")]
    Second,
    #[sea_orm(string_value = "3")]
    #[serde(rename = "3")]
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    #[sea_orm(string_value = "player")]
    Player,
    #[sea_orm(string_value = "manager")]
    Manager,
    #[sea_orm(string_value = "coach")]
    Coach,
}

/// Lifecycle state of a roster entry.
///
/// Retired members disappear from default listings but keep their historical
/// stat rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "retired")]
    Retired,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Optional link to a login account.
    pub user_id: Option<i32>,
    pub name: String,
    pub grade: Grade,
    pub position: Option<String>,
    pub uniform_number: Option<i32>,
    pub class_number: Option<String>,
    pub student_number: Option<i32>,
    pub kana: Option<String>,
    pub member_role: MemberRole,
    pub status: MemberStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(has_many = "super::absence::Entity")]
    Absence,
    #[sea_orm(has_many = "super::player_record::Entity")]
    PlayerRecord,
    #[sea_orm(has_many = "super::batting_stat::Entity")]
    BattingStat,
    #[sea_orm(has_many = "super::pitching_stat::Entity")]
    PitchingStat,
    #[sea_orm(has_many = "super::pitch_velocity::Entity")]
    PitchVelocity,
    #[sea_orm(has_many = "super::exit_velocity::Entity")]
    ExitVelocity,
    #[sea_orm(has_many = "super::pulldown_velocity::Entity")]
    PulldownVelocity,
    #[sea_orm(has_many = "super::physical_measurement::Entity")]
    PhysicalMeasurement,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::absence::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Absence.def()
    }
}

impl Related<super::player_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
