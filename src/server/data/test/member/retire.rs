use super::*;
use entity::member::MemberStatus;
use test_utils::factory::member::create_member;

/// Tests that deleting a member only flips the lifecycle state.
///
/// Expected: row still exists with status retired.
#[tokio::test]
async fn retire_keeps_the_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = create_member(db).await?;
    let repo = MemberRepository::new(db);

    assert!(repo.retire(member.id).await?);

    let reloaded = repo.get_by_id(member.id).await?.unwrap();
    assert_eq!(reloaded.status, MemberStatus::Retired);

    Ok(())
}

/// Tests retiring an id that does not exist.
///
/// Expected: Ok(false), no error.
#[tokio::test]
async fn retire_missing_member_reports_false() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    assert!(!repo.retire(4711).await?);

    Ok(())
}
