use sea_orm_migration::{prelude::*, schema::*};

use super::m20260601_000002_create_member_table::Member;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BattingStat::Table)
                    .if_not_exists()
                    .col(pk_auto(BattingStat::Id))
                    .col(integer(BattingStat::MemberId))
                    .col(string_null(BattingStat::Period))
                    .col(integer(BattingStat::Games).default(0))
                    .col(integer(BattingStat::PlateAppearances).default(0))
                    .col(integer(BattingStat::AtBats).default(0))
                    .col(integer(BattingStat::Runs).default(0))
                    .col(integer(BattingStat::Hits).default(0))
                    .col(integer(BattingStat::Singles).default(0))
                    .col(integer(BattingStat::Doubles).default(0))
                    .col(integer(BattingStat::Triples).default(0))
                    .col(integer(BattingStat::HomeRuns).default(0))
                    .col(integer(BattingStat::TotalBases).default(0))
                    .col(integer(BattingStat::Rbis).default(0))
                    .col(integer(BattingStat::StolenBaseAttempts).default(0))
                    .col(integer(BattingStat::StolenBases).default(0))
                    .col(integer(BattingStat::SacrificeBunts).default(0))
                    .col(integer(BattingStat::SacrificeFlies).default(0))
                    .col(integer(BattingStat::Walks).default(0))
                    .col(integer(BattingStat::Strikeouts).default(0))
                    .col(integer(BattingStat::Errors).default(0))
                    .col(integer(BattingStat::VsLeftAtBats).default(0))
                    .col(integer(BattingStat::VsLeftHits).default(0))
                    .col(integer(BattingStat::VsRightAtBats).default(0))
                    .col(integer(BattingStat::VsRightHits).default(0))
                    .col(timestamp(BattingStat::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(BattingStat::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_batting_stat_member_id")
                            .from(BattingStat::Table, BattingStat::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BattingStat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BattingStat {
    Table,
    Id,
    MemberId,
    Period,
    Games,
    PlateAppearances,
    AtBats,
    Runs,
    Hits,
    Singles,
    Doubles,
    Triples,
    HomeRuns,
    TotalBases,
    Rbis,
    StolenBaseAttempts,
    StolenBases,
    SacrificeBunts,
    SacrificeFlies,
    Walks,
    Strikeouts,
    Errors,
    VsLeftAtBats,
    VsLeftHits,
    VsRightAtBats,
    VsRightHits,
    CreatedAt,
    UpdatedAt,
}
