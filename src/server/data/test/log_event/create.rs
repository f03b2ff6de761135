use super::*;

/// Tests recording a log event with only the required fields.
///
/// Expected: Ok with optional fields left empty
#[tokio::test]
async fn records_event_with_optional_fields_empty() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;

    let event = LogEventRepository::new(db)
        .create(CreateLogEventParam {
            server_id: server.id.clone(),
            event_type: "member_join".to_string(),
            actor_id: None,
            actor_name: None,
            target_id: Some("42".to_string()),
            target_name: None,
            details: None,
        })
        .await?;

    assert_eq!(event.event_type, "member_join");
    assert_eq!(event.target_id.as_deref(), Some("42"));
    assert!(event.actor_id.is_none());

    Ok(())
}
