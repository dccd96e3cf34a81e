use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260601_000002_create_member_table::Member,
    m20260601_000003_create_schedule_table::Schedule,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Absence::Table)
                    .if_not_exists()
                    .col(pk_auto(Absence::Id))
                    .col(integer(Absence::MemberId))
                    .col(integer_null(Absence::ScheduleId))
                    .col(date(Absence::AbsenceDate))
                    .col(text_null(Absence::Reason))
                    .col(string_len(Absence::Status, 20).default("pending"))
                    .col(timestamp(Absence::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Absence::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_absence_member_id")
                            .from(Absence::Table, Absence::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_absence_schedule_id")
                            .from(Absence::Table, Absence::ScheduleId)
                            .to(Schedule::Table, Schedule::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Absence::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Absence {
    Table,
    Id,
    MemberId,
    ScheduleId,
    AbsenceDate,
    Reason,
    Status,
    CreatedAt,
    UpdatedAt,
}
