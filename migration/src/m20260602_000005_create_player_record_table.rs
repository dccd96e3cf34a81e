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
                    .table(PlayerRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerRecord::Id))
                    .col(integer(PlayerRecord::MemberId))
                    .col(date(PlayerRecord::RecordDate))
                    .col(integer(PlayerRecord::AtBats).default(0))
                    .col(integer(PlayerRecord::Hits).default(0))
                    .col(integer(PlayerRecord::Doubles).default(0))
                    .col(integer(PlayerRecord::Triples).default(0))
                    .col(integer(PlayerRecord::HomeRuns).default(0))
                    .col(integer(PlayerRecord::Rbis).default(0))
                    .col(integer(PlayerRecord::Runs).default(0))
                    .col(integer(PlayerRecord::Strikeouts).default(0))
                    .col(integer(PlayerRecord::Walks).default(0))
                    .col(integer(PlayerRecord::StolenBases).default(0))
                    .col(double(PlayerRecord::InningsPitched).default(0.0))
                    .col(integer(PlayerRecord::EarnedRuns).default(0))
                    .col(integer(PlayerRecord::PitchStrikeouts).default(0))
                    .col(integer(PlayerRecord::PitchWalks).default(0))
                    .col(integer(PlayerRecord::HitsAllowed).default(0))
                    .col(integer(PlayerRecord::Wins).default(0))
                    .col(integer(PlayerRecord::Losses).default(0))
                    .col(text_null(PlayerRecord::Notes))
                    .col(timestamp(PlayerRecord::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(PlayerRecord::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_record_member_id")
                            .from(PlayerRecord::Table, PlayerRecord::MemberId)
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
            .drop_table(Table::drop().table(PlayerRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerRecord {
    Table,
    Id,
    MemberId,
    RecordDate,
    AtBats,
    Hits,
    Doubles,
    Triples,
    HomeRuns,
    Rbis,
    Runs,
    Strikeouts,
    Walks,
    StolenBases,
    InningsPitched,
    EarnedRuns,
    PitchStrikeouts,
    PitchWalks,
    HitsAllowed,
    Wins,
    Losses,
    Notes,
    CreatedAt,
    UpdatedAt,
}
