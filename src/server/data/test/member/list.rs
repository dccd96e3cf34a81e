use super::*;
use entity::member::{Grade, MemberStatus};
use test_utils::factory::member::MemberFactory;

/// Tests that the default listing hides retired members.
///
/// Expected: only active members, ordered by grade then name.
#[tokio::test]
async fn active_only_hides_retired_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    MemberFactory::new(db).name("Active A").build().await?;
    MemberFactory::new(db)
        .name("Gone B")
        .status(MemberStatus::Retired)
        .build()
        .await?;

    let repo = MemberRepository::new(db);

    let active = repo.list(true).await?;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].name, "Active A");

    let everyone = repo.list(false).await?;
    assert_eq!(everyone.len(), 2);

    Ok(())
}

/// Tests the grade-then-name ordering of the roster.
#[tokio::test]
async fn orders_by_grade_then_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    MemberFactory::new(db).name("Zu").grade(Grade::First).build().await?;
    MemberFactory::new(db).name("Abe").grade(Grade::Third).build().await?;
    MemberFactory::new(db).name("Aoki").grade(Grade::First).build().await?;

    let members = MemberRepository::new(db).list(true).await?;
    let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();

    assert_eq!(names, vec!["Aoki", "Zu", "Abe"]);

    Ok(())
}
