use super::*;

/// Tests that a server's tickets come back newest first.
///
/// Expected: Ok with tickets ordered by creation time descending
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;
    let now = Utc::now();

    let older = factory::ticket::TicketFactory::new(db, &server.id)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::ticket::TicketFactory::new(db, &server.id)
        .created_at(now - Duration::minutes(5))
        .build()
        .await?;

    let tickets = TicketRepository::new(db).get_by_server(&server.id).await?;

    let ids: Vec<&str> = tickets.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec![newer.id.as_str(), older.id.as_str()]);

    Ok(())
}

/// Tests that tickets from other servers are excluded.
///
/// Expected: Ok with only the requested server's ticket
#[tokio::test]
async fn excludes_other_servers() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;
    let other = factory::create_server(db).await?;

    factory::create_ticket(db, &server.id).await?;
    factory::create_ticket(db, &other.id).await?;

    let tickets = TicketRepository::new(db).get_by_server(&server.id).await?;

    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].server_id, server.id);

    Ok(())
}
