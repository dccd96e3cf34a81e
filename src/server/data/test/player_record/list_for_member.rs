use super::*;
use chrono::NaiveDate;
use test_utils::factory::{member::create_member, player_record::PlayerRecordFactory};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Tests the date-window filter and chronological ordering.
#[tokio::test]
async fn filters_by_date_window_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::PlayerRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = create_member(db).await?;
    let repo = PlayerRecordRepository::new(db);

    for day in ["2026-04-01", "2026-05-01", "2026-06-01"] {
        PlayerRecordFactory::new(db, member.id)
            .record_date(date(day))
            .batting(4, 1)
            .build()
            .await?;
    }

    let windowed = repo
        .list_for_member(member.id, Some(date("2026-04-15")), Some(date("2026-05-15")))
        .await?;
    assert_eq!(windowed.len(), 1);
    assert_eq!(windowed[0].record_date, date("2026-05-01"));

    let all = repo.list_for_member(member.id, None, None).await?;
    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|w| w[0].record_date <= w[1].record_date));

    Ok(())
}
