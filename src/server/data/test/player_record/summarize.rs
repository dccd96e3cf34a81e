use super::*;
use test_utils::factory::{member::create_member, player_record::PlayerRecordFactory};

/// Tests the aggregate over a member with no rows at all.
///
/// Expected: zero game count and `None` sums, never an error.
#[tokio::test]
async fn zero_rows_yield_empty_totals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::PlayerRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = create_member(db).await?;

    let totals = PlayerRecordRepository::new(db).summarize(member.id).await?;

    assert_eq!(totals.games, 0);
    assert_eq!(totals.at_bats, None);
    assert_eq!(totals.hits, None);
    assert_eq!(totals.innings_pitched, None);

    Ok(())
}

/// Tests that sums cover every row of the member and nobody else's.
#[tokio::test]
async fn sums_only_the_members_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::PlayerRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = create_member(db).await?;
    let other = create_member(db).await?;

    PlayerRecordFactory::new(db, member.id)
        .batting(4, 2)
        .pitching(5.0, 1)
        .build()
        .await?;
    PlayerRecordFactory::new(db, member.id)
        .batting(3, 1)
        .pitching(4.0, 2)
        .build()
        .await?;
    PlayerRecordFactory::new(db, other.id).batting(10, 9).build().await?;

    let totals = PlayerRecordRepository::new(db).summarize(member.id).await?;

    assert_eq!(totals.games, 2);
    assert_eq!(totals.at_bats, Some(7));
    assert_eq!(totals.hits, Some(3));
    assert_eq!(totals.earned_runs, Some(3));
    assert_eq!(totals.innings_pitched, Some(9.0));

    Ok(())
}
