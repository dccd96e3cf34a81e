use super::*;
use chrono::NaiveDate;
use test_utils::factory::schedule::create_schedule_on;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Tests the single-day lookup the reminder service runs.
///
/// Expected: only that day's events, none from neighboring days.
#[tokio::test]
async fn returns_only_that_days_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_schedule_on(db, date("2026-06-14")).await?;
    create_schedule_on(db, date("2026-06-15")).await?;
    create_schedule_on(db, date("2026-06-15")).await?;
    create_schedule_on(db, date("2026-06-16")).await?;

    let events = ScheduleRepository::new(db).for_date(date("2026-06-15")).await?;

    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|s| s.event_date == date("2026-06-15")));

    Ok(())
}
