use super::*;

/// Tests enabling welcome messages on a fresh server and then changing the color.
///
/// Expected: Ok with both writes merged and goodbye fields at their defaults
#[tokio::test]
async fn merges_welcome_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .with_table(entity::prelude::WelcomeSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;

    let repo = WelcomeSettingsRepository::new(db);
    let first = repo
        .upsert(
            &server.id,
            UpdateWelcomeSettingsParam {
                welcome_enabled: Some(true),
                welcome_channel_id: Some(Some("555".to_string())),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(first.welcome_embed_color, DEFAULT_EMBED_COLOR);

    let settings = repo
        .upsert(
            &server.id,
            UpdateWelcomeSettingsParam {
                welcome_embed_color: Some("#FF0000".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(settings.welcome_enabled);
    assert_eq!(settings.welcome_channel_id.as_deref(), Some("555"));
    assert_eq!(settings.welcome_embed_color, "#FF0000");
    assert!(!settings.goodbye_enabled);
    assert_eq!(settings.goodbye_message, DEFAULT_GOODBYE_MESSAGE);

    Ok(())
}
