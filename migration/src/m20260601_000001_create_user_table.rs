use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::OpenId))
                    .col(string_null(User::Name))
                    .col(string_null(User::Email))
                    .col(string_null(User::LoginMethod))
                    .col(string_len(User::Role, 20).default("user"))
                    .col(timestamp(User::LastSignedIn).default(Expr::current_timestamp()))
                    .col(timestamp(User::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(User::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    OpenId,
    Name,
    Email,
    LoginMethod,
    Role,
    LastSignedIn,
    CreatedAt,
    UpdatedAt,
}
