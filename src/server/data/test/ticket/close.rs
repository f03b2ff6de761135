use super::*;

/// Tests closing an open ticket.
///
/// Expected: Ok(Some) with status closed and a close time
#[tokio::test]
async fn closes_open_ticket() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;
    let ticket = factory::create_ticket(db, &server.id).await?;

    let closed = TicketRepository::new(db).close(&ticket.id).await?.unwrap();

    assert_eq!(closed.status, "closed");
    assert!(closed.closed_at.is_some());

    Ok(())
}

/// Tests closing a ticket twice.
///
/// Expected: Ok(Some) both times, still closed, close time not earlier than the first
#[tokio::test]
async fn closing_twice_stays_closed() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;
    let ticket = factory::create_ticket(db, &server.id).await?;

    let repo = TicketRepository::new(db);
    let first = repo.close(&ticket.id).await?.unwrap();
    let second = repo.close(&ticket.id).await?.unwrap();

    assert_eq!(second.status, "closed");
    assert!(second.closed_at.unwrap() >= first.closed_at.unwrap());

    Ok(())
}

/// Tests closing a ticket that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_ticket() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let result = TicketRepository::new(db).close("missing").await?;

    assert!(result.is_none());

    Ok(())
}
