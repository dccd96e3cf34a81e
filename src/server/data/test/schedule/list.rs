use super::*;
use chrono::NaiveDate;
use test_utils::factory::schedule::{create_schedule_on, ScheduleFactory};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Tests the optional from/to window.
#[tokio::test]
async fn windows_are_inclusive_on_both_ends() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_schedule_on(db, date("2026-06-01")).await?;
    create_schedule_on(db, date("2026-06-10")).await?;
    create_schedule_on(db, date("2026-06-20")).await?;

    let repo = ScheduleRepository::new(db);

    let windowed = repo
        .list(Some(date("2026-06-01")), Some(date("2026-06-10")))
        .await?;
    assert_eq!(windowed.len(), 2);

    let open_ended = repo.list(Some(date("2026-06-10")), None).await?;
    assert_eq!(open_ended.len(), 2);

    Ok(())
}

/// Tests ordering within one day by start time.
#[tokio::test]
async fn same_day_orders_by_start_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ScheduleFactory::new(db)
        .title("Afternoon")
        .event_date(date("2026-06-15"))
        .start_time(Some("13:00".to_string()))
        .build()
        .await?;
    ScheduleFactory::new(db)
        .title("Morning")
        .event_date(date("2026-06-15"))
        .start_time(Some("08:00".to_string()))
        .build()
        .await?;

    let events = ScheduleRepository::new(db).list(None, None).await?;
    let titles: Vec<&str> = events.iter().map(|s| s.title.as_str()).collect();

    assert_eq!(titles, vec!["Morning", "Afternoon"]);

    Ok(())
}
