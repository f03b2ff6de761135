use super::*;

/// Tests that a first write of only the support roles keeps the default greeting.
///
/// Expected: Ok with roles stored and default welcome message
#[tokio::test]
async fn seeds_default_welcome_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .with_table(entity::prelude::TicketSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;

    let settings = TicketSettingsRepository::new(db)
        .upsert(
            &server.id,
            UpdateTicketSettingsParam {
                support_roles: Some(vec!["42".to_string()]),
                ..Default::default()
            },
        )
        .await?;

    assert!(settings.enabled);
    assert_eq!(settings.support_roles, vec!["42".to_string()]);
    assert_eq!(settings.welcome_message, DEFAULT_TICKET_WELCOME_MESSAGE);

    Ok(())
}

/// Tests that updating the message keeps previously stored roles and category.
///
/// Expected: Ok with message replaced and other fields preserved
#[tokio::test]
async fn preserves_unspecified_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .with_table(entity::prelude::TicketSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;

    let repo = TicketSettingsRepository::new(db);
    repo.upsert(
        &server.id,
        UpdateTicketSettingsParam {
            category_id: Some(Some("77".to_string())),
            support_roles: Some(vec!["42".to_string()]),
            ..Default::default()
        },
    )
    .await?;
    let settings = repo
        .upsert(
            &server.id,
            UpdateTicketSettingsParam {
                welcome_message: Some("Hang tight!".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(settings.welcome_message, "Hang tight!");
    assert_eq!(settings.category_id.as_deref(), Some("77"));
    assert_eq!(settings.support_roles, vec!["42".to_string()]);

    Ok(())
}
