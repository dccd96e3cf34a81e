use sea_orm_migration::{prelude::*, schema::*};

use super::m20260601_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedule::Table)
                    .if_not_exists()
                    .col(pk_auto(Schedule::Id))
                    .col(string(Schedule::Title))
                    .col(text_null(Schedule::Description))
                    .col(string_len(Schedule::EventType, 20).default("practice"))
                    .col(date(Schedule::EventDate))
                    .col(string_null(Schedule::StartTime))
                    .col(string_null(Schedule::EndTime))
                    .col(string_null(Schedule::Location))
                    .col(string_null(Schedule::Uniform))
                    .col(integer_null(Schedule::CreatedBy))
                    .col(timestamp(Schedule::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Schedule::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_created_by")
                            .from(Schedule::Table, Schedule::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Schedule {
    Table,
    Id,
    Title,
    Description,
    EventType,
    EventDate,
    StartTime,
    EndTime,
    Location,
    Uniform,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
