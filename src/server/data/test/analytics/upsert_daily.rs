use super::*;

/// Tests that writing the same day twice keeps a single row with the latest counters.
///
/// Expected: Ok with one row holding the second write's values
#[tokio::test]
async fn overwrites_same_day() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;

    let repo = ServerAnalyticsRepository::new(db);
    repo.upsert_daily(param(&server.id, day(10), 100)).await?;
    let stored = repo
        .upsert_daily(UpsertAnalyticsParam {
            message_count: 7,
            ..param(&server.id, day(10), 120)
        })
        .await?;

    assert_eq!(stored.member_count, 120);
    assert_eq!(stored.message_count, 7);

    let rows = entity::prelude::ServerAnalytics::find().count(db).await?;
    assert_eq!(rows, 1);

    Ok(())
}
