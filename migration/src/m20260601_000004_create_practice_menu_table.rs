use sea_orm_migration::{prelude::*, schema::*};

use super::m20260601_000003_create_schedule_table::Schedule;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PracticeMenu::Table)
                    .if_not_exists()
                    .col(pk_auto(PracticeMenu::Id))
                    .col(integer_null(PracticeMenu::ScheduleId))
                    .col(string_len(PracticeMenu::Category, 20))
                    .col(string(PracticeMenu::Title))
                    .col(text_null(PracticeMenu::Description))
                    .col(integer_null(PracticeMenu::Duration))
                    .col(string_null(PracticeMenu::TargetGroup))
                    .col(timestamp(PracticeMenu::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(PracticeMenu::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_practice_menu_schedule_id")
                            .from(PracticeMenu::Table, PracticeMenu::ScheduleId)
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
            .drop_table(Table::drop().table(PracticeMenu::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PracticeMenu {
    Table,
    Id,
    ScheduleId,
    Category,
    Title,
    Description,
    Duration,
    TargetGroup,
    CreatedAt,
    UpdatedAt,
}
