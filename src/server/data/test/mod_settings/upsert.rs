use super::*;

/// Tests the first write for a server.
///
/// Verifies that unspecified fields are seeded with the application defaults.
///
/// Expected: Ok with ban disabled and every other field at its default
#[tokio::test]
async fn seeds_defaults_on_first_write() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .with_table(entity::prelude::ModSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;

    let settings = ModSettingsRepository::new(db)
        .upsert(
            &server.id,
            UpdateModSettingsParam {
                ban_enabled: Some(false),
                ..Default::default()
            },
        )
        .await?;

    let defaults = ModSettings::defaults(&server.id);
    assert!(!settings.ban_enabled);
    assert_eq!(settings.kick_enabled, defaults.kick_enabled);
    assert_eq!(settings.mute_enabled, defaults.mute_enabled);
    assert_eq!(settings.warn_enabled, defaults.warn_enabled);
    assert_eq!(settings.mod_roles, defaults.mod_roles);
    assert_eq!(settings.log_channel_id, None);

    Ok(())
}

/// Tests that consecutive partial writes merge.
///
/// Sets field A, then field B, then checks that A still holds its first value.
///
/// Expected: Ok with both writes reflected
#[tokio::test]
async fn merges_partial_updates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .with_table(entity::prelude::ModSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;

    let repo = ModSettingsRepository::new(db);
    repo.upsert(
        &server.id,
        UpdateModSettingsParam {
            kick_enabled: Some(false),
            ..Default::default()
        },
    )
    .await?;
    repo.upsert(
        &server.id,
        UpdateModSettingsParam {
            log_channel_id: Some(Some("999".to_string())),
            ..Default::default()
        },
    )
    .await?;

    let settings = repo.get(&server.id).await?.unwrap();

    assert!(!settings.kick_enabled);
    assert_eq!(settings.log_channel_id.as_deref(), Some("999"));
    assert!(settings.ban_enabled);

    Ok(())
}

/// Tests clearing a nullable field with an explicit null.
///
/// Expected: Ok with log channel cleared and other fields untouched
#[tokio::test]
async fn clears_nullable_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .with_table(entity::prelude::ModSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;

    let repo = ModSettingsRepository::new(db);
    repo.upsert(
        &server.id,
        UpdateModSettingsParam {
            warn_enabled: Some(false),
            log_channel_id: Some(Some("999".to_string())),
            ..Default::default()
        },
    )
    .await?;
    let settings = repo
        .upsert(
            &server.id,
            UpdateModSettingsParam {
                log_channel_id: Some(None),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(settings.log_channel_id, None);
    assert!(!settings.warn_enabled);

    Ok(())
}

/// Tests that writing one server's settings leaves another server's row alone.
///
/// Expected: Ok with the second server still at defaults
#[tokio::test]
async fn does_not_touch_other_servers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .with_table(entity::prelude::ModSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let first = factory::create_server(db).await?;
    let second = factory::create_server(db).await?;

    let repo = ModSettingsRepository::new(db);
    repo.upsert(&second.id, UpdateModSettingsParam::default())
        .await?;
    repo.upsert(
        &first.id,
        UpdateModSettingsParam {
            mute_enabled: Some(false),
            ..Default::default()
        },
    )
    .await?;

    let untouched = repo.get(&second.id).await?.unwrap();
    assert!(untouched.mute_enabled);

    Ok(())
}
