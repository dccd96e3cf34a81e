use super::*;
use entity::absence::AbsenceStatus;
use test_utils::factory::{absence::create_absence, member::create_member};

/// Tests the raw status write; transition rules live in the service.
#[tokio::test]
async fn writes_the_new_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::Schedule)
        .with_table(entity::prelude::Absence)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = create_member(db).await?;
    let absence = create_absence(db, member.id).await?;

    let repo = AbsenceRepository::new(db);
    let updated = repo.update_status(absence, AbsenceStatus::Approved).await?;

    assert_eq!(updated.status, AbsenceStatus::Approved);

    let reloaded = repo.get_by_id(updated.id).await?.unwrap();
    assert_eq!(reloaded.status, AbsenceStatus::Approved);

    Ok(())
}
