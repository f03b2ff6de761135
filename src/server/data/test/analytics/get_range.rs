use super::*;

/// Tests that the range is inclusive and ordered by day.
///
/// Expected: Ok with days inside the range, oldest first
#[tokio::test]
async fn returns_days_in_range_ascending() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;

    let repo = ServerAnalyticsRepository::new(db);
    for d in [12, 9, 10, 15] {
        repo.upsert_daily(param(&server.id, day(d), d as i32)).await?;
    }

    let rows = repo
        .get_range(
            &server.id,
            DateRange {
                start: day(10),
                end: day(12),
            },
        )
        .await?;

    let days: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
    assert_eq!(days, vec![day(10), day(12)]);

    Ok(())
}
