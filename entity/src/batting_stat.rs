//! Per-member periodic batting snapshot.
//!
//! Only counting columns are stored; batting average, OBP, slugging, OPS and
//! the left/right split averages are derived when rows are read.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "batting_stat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub member_id: i32,
    /// Free-form label for the covered stretch, e.g. "spring block".
    pub period: Option<String>,
    pub games: i32,
    pub plate_appearances: i32,
    pub at_bats: i32,
    pub runs: i32,
    pub hits: i32,
    pub singles: i32,
    pub doubles: i32,
    pub triples: i32,
    pub home_runs: i32,
    pub total_bases: i32,
    pub rbis: i32,
    pub stolen_base_attempts: i32,
    pub stolen_bases: i32,
    pub sacrifice_bunts: i32,
    pub sacrifice_flies: i32,
    pub walks: i32,
    pub strikeouts: i32,
    pub errors: i32,
    pub vs_left_at_bats: i32,
    pub vs_left_hits: i32,
    pub vs_right_at_bats: i32,
    pub vs_right_hits: i32,
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
