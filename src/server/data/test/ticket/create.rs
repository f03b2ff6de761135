use super::*;

/// Tests opening a ticket.
///
/// Expected: Ok with status open and no close time
#[tokio::test]
async fn creates_open_ticket() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;

    let ticket = TicketRepository::new(db)
        .create(CreateTicketParam {
            server_id: server.id.clone(),
            channel_id: "chan-1".to_string(),
            creator_id: "member-1".to_string(),
            creator_name: "Alex".to_string(),
            subject: Some("Appeal".to_string()),
        })
        .await?;

    assert_eq!(ticket.server_id, server.id);
    assert_eq!(ticket.status, "open");
    assert_eq!(ticket.subject.as_deref(), Some("Appeal"));
    assert!(ticket.closed_at.is_none());

    Ok(())
}

/// Tests opening a ticket for a server that is not registered.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_server() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let result = TicketRepository::new(db)
        .create(CreateTicketParam {
            server_id: "missing".to_string(),
            channel_id: "chan-1".to_string(),
            creator_id: "member-1".to_string(),
            creator_name: "Alex".to_string(),
            subject: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
