use super::*;

/// Tests that the limit caps the number of returned events.
///
/// Expected: Ok with the `limit` newest events, newest first
#[tokio::test]
async fn applies_limit_to_newest_events() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;
    let now = Utc::now();

    let mut created = Vec::new();
    for minutes in [50, 40, 30, 20, 10] {
        let event =
            factory::log_event::create_log_event_at(db, &server.id, now - Duration::minutes(minutes))
                .await?;
        created.push(event.id);
    }

    let events = LogEventRepository::new(db)
        .get_by_server(&server.id, 3)
        .await?;

    let ids: Vec<String> = events.into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![created[4].clone(), created[3].clone(), created[2].clone()]);

    Ok(())
}

/// Tests reading events for a server with none.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_quiet_server() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;
    let other = factory::create_server(db).await?;
    factory::create_log_event(db, &other.id).await?;

    let events = LogEventRepository::new(db)
        .get_by_server(&server.id, 50)
        .await?;

    assert!(events.is_empty());

    Ok(())
}
