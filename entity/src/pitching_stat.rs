//! Per-member periodic pitching snapshot; rates derive from counts on read.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pitching_stat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub member_id: i32,
    pub period: Option<String>,
    pub games: i32,
    /// Decimal innings (65 1/3 innings is stored as 65.333...).
    pub innings_pitched: f64,
    pub batters_faced: i32,
    pub hits_allowed: i32,
    pub home_runs_allowed: i32,
    pub walks: i32,
    pub strikeouts: i32,
    pub earned_runs: i32,
    pub runs_allowed: i32,
    pub first_pitch_strikes: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
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
