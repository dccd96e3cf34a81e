use super::*;
use test_utils::factory::{
    absence::AbsenceFactory,
    member::create_member,
    schedule::ScheduleFactory,
};

/// Tests the schedule and member filters.
#[tokio::test]
async fn filters_by_schedule_and_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::Schedule)
        .with_table(entity::prelude::Absence)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member_a = create_member(db).await?;
    let member_b = create_member(db).await?;
    let schedule = ScheduleFactory::new(db).build().await?;

    AbsenceFactory::new(db, member_a.id).schedule_id(schedule.id).build().await?;
    AbsenceFactory::new(db, member_a.id).build().await?;
    AbsenceFactory::new(db, member_b.id).build().await?;

    let repo = AbsenceRepository::new(db);

    assert_eq!(repo.list(None, None).await?.len(), 3);
    assert_eq!(repo.list(Some(schedule.id), None).await?.len(), 1);
    assert_eq!(repo.list(None, Some(member_a.id)).await?.len(), 2);
    assert_eq!(repo.list(Some(schedule.id), Some(member_b.id)).await?.len(), 0);

    Ok(())
}
