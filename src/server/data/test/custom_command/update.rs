use super::*;

/// Tests a partial update of a command.
///
/// Expected: Ok(Some) with only the supplied fields changed
#[tokio::test]
async fn updates_supplied_fields() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;
    let command = factory::custom_command::CustomCommandFactory::new(db, &server.id)
        .name("faq")
        .build()
        .await?;

    let updated = CustomCommandRepository::new(db)
        .update(
            &command.id,
            UpdateCustomCommandParam {
                response: Some("See #faq".to_string()),
                cooldown: Some(30),
                description: Some(Some("Frequently asked".to_string())),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "faq");
    assert_eq!(updated.response, "See #faq");
    assert_eq!(updated.cooldown, 30);
    assert_eq!(updated.description.as_deref(), Some("Frequently asked"));
    assert!(updated.updated_at >= command.updated_at);

    Ok(())
}

/// Tests updating a command that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_command() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let result = CustomCommandRepository::new(db)
        .update(
            "missing",
            UpdateCustomCommandParam {
                enabled: Some(false),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
