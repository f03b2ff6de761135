use super::*;

/// Tests counting open tickets across several servers.
///
/// Expected: Ok with closed tickets and unlisted servers excluded
#[tokio::test]
async fn counts_only_open_tickets_in_listed_servers() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let first = factory::create_server(db).await?;
    let second = factory::create_server(db).await?;
    let unlisted = factory::create_server(db).await?;

    factory::create_ticket(db, &first.id).await?;
    factory::create_ticket(db, &second.id).await?;
    factory::ticket::TicketFactory::new(db, &second.id)
        .status("closed")
        .build()
        .await?;
    factory::create_ticket(db, &unlisted.id).await?;

    let count = TicketRepository::new(db)
        .count_open_for_servers(&[first.id, second.id])
        .await?;

    assert_eq!(count, 2);

    Ok(())
}

/// Tests counting with no servers.
///
/// Expected: Ok(0) without touching the table
#[tokio::test]
async fn returns_zero_for_empty_list() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let count = TicketRepository::new(db).count_open_for_servers(&[]).await?;

    assert_eq!(count, 0);

    Ok(())
}
