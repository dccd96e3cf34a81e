use super::*;
use crate::model::member::CreateMemberDto;
use entity::member::{Grade, MemberRole, MemberStatus};

/// Tests creating a member with the full field set.
///
/// Expected: stored row carries the given fields and starts active.
#[tokio::test]
async fn creates_active_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo
        .create(&CreateMemberDto {
            name: "Suzuki".to_string(),
            grade: Grade::Second,
            position: Some("Catcher".to_string()),
            uniform_number: Some(2),
            class_number: None,
            student_number: None,
            kana: None,
            member_role: None,
            user_id: None,
        })
        .await?;

    assert_eq!(member.name, "Suzuki");
    assert_eq!(member.grade, Grade::Second);
    assert_eq!(member.member_role, MemberRole::Player);
    assert_eq!(member.status, MemberStatus::Active);

    Ok(())
}
