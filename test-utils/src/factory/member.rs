//! Member factory.

use chrono::Utc;
use entity::member::{Grade, MemberRole, MemberStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test roster members with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let member = MemberFactory::new(&db)
///     .name("Tanaka")
///     .grade(Grade::Third)
///     .status(MemberStatus::Retired)
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Option<i32>,
    name: String,
    grade: Grade,
    position: Option<String>,
    uniform_number: Option<i32>,
    member_role: MemberRole,
    status: MemberStatus,
}

impl<'a> MemberFactory<'a> {
    /// Defaults: unique name, grade 1, active player with no user link.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: None,
            name: format!("Member {}", id),
            grade: Grade::First,
            position: None,
            uniform_number: None,
            member_role: MemberRole::Player,
            status: MemberStatus::Active,
        }
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn grade(mut self, grade: Grade) -> Self {
        self.grade = grade;
        self
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn uniform_number(mut self, uniform_number: i32) -> Self {
        self.uniform_number = Some(uniform_number);
        self
    }

    pub fn member_role(mut self, member_role: MemberRole) -> Self {
        self.member_role = member_role;
        self
    }

    pub fn status(mut self, status: MemberStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        let now = Utc::now();
        entity::member::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            grade: ActiveValue::Set(self.grade),
            position: ActiveValue::Set(self.position),
            uniform_number: ActiveValue::Set(self.uniform_number),
            class_number: ActiveValue::Set(None),
            student_number: ActiveValue::Set(None),
            kana: ActiveValue::Set(None),
            member_role: ActiveValue::Set(self.member_role),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active first-grade player with default values.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_member_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(User)
            .with_table(Member)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let member = create_member(db).await?;

        assert!(!member.name.is_empty());
        assert_eq!(member.grade, Grade::First);
        assert_eq!(member.status, MemberStatus::Active);
        assert!(member.user_id.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_member_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(User)
            .with_table(Member)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let member = MemberFactory::new(db)
            .name("Tanaka")
            .grade(Grade::Third)
            .position("Shortstop")
            .uniform_number(6)
            .status(MemberStatus::Retired)
            .build()
            .await?;

        assert_eq!(member.name, "Tanaka");
        assert_eq!(member.grade, Grade::Third);
        assert_eq!(member.position.as_deref(), Some("Shortstop"));
        assert_eq!(member.uniform_number, Some(6));
        assert_eq!(member.status, MemberStatus::Retired);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_members() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(User)
            .with_table(Member)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let member1 = create_member(db).await?;
        let member2 = create_member(db).await?;

        assert_ne!(member1.id, member2.id);
        assert_ne!(member1.name, member2.name);

        Ok(())
    }
}
