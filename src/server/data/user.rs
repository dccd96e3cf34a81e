//! User data repository.
//!
//! Handles account upserts at login time and the lookups the auth guard
//! performs on every request.

use chrono::Utc;
use entity::user::UserRole;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::user::UpsertUserParam;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user from the identity provider's callback payload.
    ///
    /// Inserts a new account or refreshes name, email, login method and the
    /// last-signed-in timestamp of an existing one. The role column is only
    /// touched when `make_admin` is set, so an admin never silently loses the
    /// role by logging in again.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<entity::user::Model, DbErr> {
        let mut update_columns = vec![
            entity::user::Column::Name,
            entity::user::Column::Email,
            entity::user::Column::LoginMethod,
            entity::user::Column::LastSignedIn,
        ];

        if param.make_admin {
            update_columns.push(entity::user::Column::Role);
        }

        let now = Utc::now();
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            open_id: ActiveValue::Set(param.open_id),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            login_method: ActiveValue::Set(param.login_method),
            role: ActiveValue::Set(if param.make_admin {
                UserRole::Admin
            } else {
                UserRole::User
            }),
            last_signed_in: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::OpenId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_open_id(
        &self,
        open_id: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::OpenId.eq(open_id))
            .one(self.db)
            .await
    }
}
