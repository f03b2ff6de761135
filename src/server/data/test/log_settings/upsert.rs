use super::*;

/// Tests toggling one log category on a fresh server.
///
/// Expected: Ok with the toggle applied and other categories at their defaults
#[tokio::test]
async fn seeds_defaults_on_first_write() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .with_table(entity::prelude::LogSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;

    let settings = LogSettingsRepository::new(db)
        .upsert(
            &server.id,
            UpdateLogSettingsParam {
                log_voice_activity: Some(true),
                ..Default::default()
            },
        )
        .await?;

    assert!(settings.log_voice_activity);
    assert!(settings.log_mod_actions);
    assert!(settings.log_member_joins);
    assert!(settings.log_member_leaves);
    assert!(!settings.log_message_edits);
    assert!(!settings.log_message_deletes);
    assert!(!settings.log_role_changes);
    assert!(settings.log_channel_id.is_none());

    Ok(())
}
