use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameResult::Table)
                    .if_not_exists()
                    .col(pk_auto(GameResult::Id))
                    .col(integer_null(GameResult::GameNumber))
                    .col(date(GameResult::GameDate))
                    .col(string(GameResult::Opponent))
                    .col(string_len(GameResult::Result, 20))
                    .col(string_null(GameResult::HomeAway))
                    .col(integer_null(GameResult::TeamScore))
                    .col(integer_null(GameResult::OpponentScore))
                    .col(string_null(GameResult::Innings))
                    .col(text_null(GameResult::Notes))
                    .col(timestamp(GameResult::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameResult::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameResult {
    Table,
    Id,
    GameNumber,
    GameDate,
    Opponent,
    Result,
    HomeAway,
    TeamScore,
    OpponentScore,
    Innings,
    Notes,
    CreatedAt,
}
