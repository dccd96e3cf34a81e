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
                    .table(PhysicalMeasurement::Table)
                    .if_not_exists()
                    .col(pk_auto(PhysicalMeasurement::Id))
                    .col(integer(PhysicalMeasurement::MemberId))
                    .col(date(PhysicalMeasurement::MeasureDate))
                    .col(string_len(PhysicalMeasurement::Category, 20))
                    .col(double_null(PhysicalMeasurement::Value))
                    .col(
                        timestamp(PhysicalMeasurement::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_physical_measurement_member_id")
                            .from(PhysicalMeasurement::Table, PhysicalMeasurement::MemberId)
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
            .drop_table(Table::drop().table(PhysicalMeasurement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PhysicalMeasurement {
    Table,
    Id,
    MemberId,
    MeasureDate,
    Category,
    Value,
    CreatedAt,
}
