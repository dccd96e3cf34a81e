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
                    .table(ExitVelocity::Table)
                    .if_not_exists()
                    .col(pk_auto(ExitVelocity::Id))
                    .col(integer(ExitVelocity::MemberId))
                    .col(date_null(ExitVelocity::MeasureDate))
                    .col(double_null(ExitVelocity::AvgSpeed))
                    .col(double_null(ExitVelocity::MaxSpeed))
                    .col(integer_null(ExitVelocity::AvgRank))
                    .col(integer_null(ExitVelocity::MaxRank))
                    .col(timestamp(ExitVelocity::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exit_velocity_member_id")
                            .from(ExitVelocity::Table, ExitVelocity::MemberId)
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
            .drop_table(Table::drop().table(ExitVelocity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ExitVelocity {
    Table,
    Id,
    MemberId,
    MeasureDate,
    AvgSpeed,
    MaxSpeed,
    AvgRank,
    MaxRank,
    CreatedAt,
}
