use super::*;
use crate::model::absence::CreateAbsenceDto;
use chrono::NaiveDate;
use entity::absence::AbsenceStatus;
use test_utils::factory::member::create_member;

/// Tests that a new absence always starts pending.
#[tokio::test]
async fn new_absences_start_pending() -> Result<(), DbErr> {
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

    let absence = AbsenceRepository::new(db)
        .create(&CreateAbsenceDto {
            member_id: member.id,
            schedule_id: None,
            absence_date: NaiveDate::from_ymd_opt(2026, 6, 20).unwrap(),
            reason: Some("Exam week".to_string()),
        })
        .await?;

    assert_eq!(absence.status, AbsenceStatus::Pending);
    assert_eq!(absence.member_id, member.id);
    assert_eq!(absence.reason.as_deref(), Some("Exam week"));

    Ok(())
}
