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
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(integer_null(Member::UserId))
                    .col(string(Member::Name))
                    .col(string_len(Member::Grade, 4))
                    .col(string_null(Member::Position))
                    .col(integer_null(Member::UniformNumber))
                    .col(string_null(Member::ClassNumber))
                    .col(integer_null(Member::StudentNumber))
                    .col(string_null(Member::Kana))
                    .col(string_len(Member::MemberRole, 20).default("player"))
                    .col(string_len(Member::Status, 20).default("active"))
                    .col(timestamp(Member::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Member::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_user_id")
                            .from(Member::Table, Member::UserId)
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
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    UserId,
    Name,
    Grade,
    Position,
    UniformNumber,
    ClassNumber,
    StudentNumber,
    Kana,
    MemberRole,
    Status,
    CreatedAt,
    UpdatedAt,
}
