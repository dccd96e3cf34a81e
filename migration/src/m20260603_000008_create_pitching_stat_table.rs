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
                    .table(PitchingStat::Table)
                    .if_not_exists()
                    .col(pk_auto(PitchingStat::Id))
                    .col(integer(PitchingStat::MemberId))
                    .col(string_null(PitchingStat::Period))
                    .col(integer(PitchingStat::Games).default(0))
                    .col(double(PitchingStat::InningsPitched).default(0.0))
                    .col(integer(PitchingStat::BattersFaced).default(0))
                    .col(integer(PitchingStat::HitsAllowed).default(0))
                    .col(integer(PitchingStat::HomeRunsAllowed).default(0))
                    .col(integer(PitchingStat::Walks).default(0))
                    .col(integer(PitchingStat::Strikeouts).default(0))
                    .col(integer(PitchingStat::EarnedRuns).default(0))
                    .col(integer(PitchingStat::RunsAllowed).default(0))
                    .col(integer(PitchingStat::FirstPitchStrikes).default(0))
                    .col(timestamp(PitchingStat::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(PitchingStat::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pitching_stat_member_id")
                            .from(PitchingStat::Table, PitchingStat::MemberId)
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
            .drop_table(Table::drop().table(PitchingStat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PitchingStat {
    Table,
    Id,
    MemberId,
    Period,
    Games,
    InningsPitched,
    BattersFaced,
    HitsAllowed,
    HomeRunsAllowed,
    Walks,
    Strikeouts,
    EarnedRuns,
    RunsAllowed,
    FirstPitchStrikes,
    CreatedAt,
    UpdatedAt,
}
