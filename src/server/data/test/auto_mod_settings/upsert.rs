use super::*;

/// Tests the auto-moderation defaults seeded on first write.
///
/// Expected: Ok with documented thresholds and actions
#[tokio::test]
async fn seeds_defaults_on_first_write() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .with_table(entity::prelude::AutoModSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;

    let settings = AutoModSettingsRepository::new(db)
        .upsert(
            &server.id,
            UpdateAutoModSettingsParam {
                spam_enabled: Some(true),
                ..Default::default()
            },
        )
        .await?;

    assert!(settings.spam_enabled);
    assert_eq!(settings.spam_threshold, 5);
    assert_eq!(settings.spam_interval, 5);
    assert_eq!(settings.spam_action, "mute");
    assert_eq!(settings.word_filter_action, "delete");
    assert_eq!(settings.raid_join_threshold, 10);
    assert_eq!(settings.raid_join_interval, 10);
    assert_eq!(settings.raid_action, "lockdown");
    assert!(settings.filtered_words.is_empty());

    Ok(())
}

/// Tests updating actions and word list without losing earlier thresholds.
///
/// Expected: Ok with new actions and words, threshold from the first write
#[tokio::test]
async fn merges_actions_and_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .with_table(entity::prelude::AutoModSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;

    let repo = AutoModSettingsRepository::new(db);
    repo.upsert(
        &server.id,
        UpdateAutoModSettingsParam {
            spam_threshold: Some(8),
            ..Default::default()
        },
    )
    .await?;
    let settings = repo
        .upsert(
            &server.id,
            UpdateAutoModSettingsParam {
                spam_action: Some(SpamAction::Ban),
                raid_action: Some(RaidAction::Kick),
                filtered_words: Some(vec!["spoiler".to_string()]),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(settings.spam_threshold, 8);
    assert_eq!(settings.spam_action, "ban");
    assert_eq!(settings.raid_action, "kick");
    assert_eq!(settings.filtered_words, vec!["spoiler".to_string()]);

    Ok(())
}
