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
                    .table(PulldownVelocity::Table)
                    .if_not_exists()
                    .col(pk_auto(PulldownVelocity::Id))
                    .col(integer(PulldownVelocity::MemberId))
                    .col(date_null(PulldownVelocity::MeasureDate))
                    .col(double_null(PulldownVelocity::AvgSpeed))
                    .col(double_null(PulldownVelocity::MaxSpeed))
                    .col(integer_null(PulldownVelocity::AvgRank))
                    .col(integer_null(PulldownVelocity::MaxRank))
                    .col(timestamp(PulldownVelocity::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pulldown_velocity_member_id")
                            .from(PulldownVelocity::Table, PulldownVelocity::MemberId)
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
            .drop_table(Table::drop().table(PulldownVelocity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PulldownVelocity {
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
