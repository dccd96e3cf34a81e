use super::*;
use crate::model::member::UpdateMemberDto;
use entity::member::Grade;
use test_utils::factory::member::MemberFactory;

fn empty_update() -> UpdateMemberDto {
    UpdateMemberDto {
        name: None,
        grade: None,
        position: None,
        uniform_number: None,
        class_number: None,
        student_number: None,
        kana: None,
        member_role: None,
        status: None,
        user_id: None,
    }
}

/// Tests that absent fields keep their stored values.
#[tokio::test]
async fn partial_update_leaves_other_fields_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = MemberFactory::new(db)
        .name("Mori")
        .grade(Grade::Second)
        .position("First base")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let updated = repo
        .update(
            member.id,
            &UpdateMemberDto {
                uniform_number: Some(10),
                ..empty_update()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.uniform_number, Some(10));
    assert_eq!(updated.name, "Mori");
    assert_eq!(updated.grade, Grade::Second);
    assert_eq!(updated.position.as_deref(), Some("First base"));

    Ok(())
}

/// Tests updating an id that does not exist.
///
/// Expected: Ok(None).
#[tokio::test]
async fn update_missing_member_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let result = repo.update(4711, &empty_update()).await?;

    assert!(result.is_none());

    Ok(())
}
