//! Raw per-game counting stats for one member on one date.
//!
//! These rows are the source of truth for career totals; the summary query
//! sums them and derives every rate at read time.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "player_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub member_id: i32,
    pub record_date: Date,
    pub at_bats: i32,
    pub hits: i32,
    pub doubles: i32,
    pub triples: i32,
    pub home_runs: i32,
    pub rbis: i32,
    pub runs: i32,
    pub strikeouts: i32,
    pub walks: i32,
    pub stolen_bases: i32,
    /// Decimal innings (7 1/3 innings is stored as 7.333...).
    pub innings_pitched: f64,
    pub earned_runs: i32,
    pub pitch_strikeouts: i32,
    pub pitch_walks: i32,
    pub hits_allowed: i32,
    pub wins: i32,
    pub losses: i32,
    pub notes: Option<String>,
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
