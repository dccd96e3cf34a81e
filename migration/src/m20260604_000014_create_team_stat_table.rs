use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamStat::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamStat::Id))
                    .col(string_null(TeamStat::Period))
                    .col(integer(TeamStat::TotalGames).default(0))
                    .col(integer(TeamStat::Wins).default(0))
                    .col(integer(TeamStat::Losses).default(0))
                    .col(integer(TeamStat::Draws).default(0))
                    .col(double_null(TeamStat::TeamBattingAvg))
                    .col(double_null(TeamStat::TeamSlugging))
                    .col(double_null(TeamStat::TeamOps))
                    .col(double_null(TeamStat::TeamEra))
                    .col(double_null(TeamStat::TeamWhip))
                    .col(double_null(TeamStat::AvgRunsScored))
                    .col(double_null(TeamStat::AvgRunsAllowed))
                    .col(timestamp(TeamStat::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamStat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamStat {
    Table,
    Id,
    Period,
    TotalGames,
    Wins,
    Losses,
    Draws,
    TeamBattingAvg,
    TeamSlugging,
    TeamOps,
    TeamEra,
    TeamWhip,
    AvgRunsScored,
    AvgRunsAllowed,
    CreatedAt,
}
