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
                    .table(PitchVelocity::Table)
                    .if_not_exists()
                    .col(pk_auto(PitchVelocity::Id))
                    .col(integer(PitchVelocity::MemberId))
                    .col(double_null(PitchVelocity::AvgFastball))
                    .col(double_null(PitchVelocity::AvgBreaking))
                    .col(double_null(PitchVelocity::MaxFastball))
                    .col(double_null(PitchVelocity::MaxBreaking))
                    .col(timestamp(PitchVelocity::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pitch_velocity_member_id")
                            .from(PitchVelocity::Table, PitchVelocity::MemberId)
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
            .drop_table(Table::drop().table(PitchVelocity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PitchVelocity {
    Table,
    Id,
    MemberId,
    AvgFastball,
    AvgBreaking,
    MaxFastball,
    MaxBreaking,
    CreatedAt,
}
