use super::*;

/// Tests reading settings for a server that never saved any.
///
/// Expected: Ok(None), leaving default substitution to the service layer
#[tokio::test]
async fn returns_none_when_unset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .with_table(entity::prelude::ModSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;

    let settings = ModSettingsRepository::new(db).get(&server.id).await?;

    assert!(settings.is_none());

    Ok(())
}

/// Tests reading settings after they have been saved.
///
/// Expected: Ok(Some) with the stored values and a timestamp
#[tokio::test]
async fn returns_saved_settings() -> Result<(), DbErr> {
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
            mod_roles: Some(vec!["111".to_string(), "222".to_string()]),
            ..Default::default()
        },
    )
    .await?;

    let settings = repo.get(&server.id).await?.unwrap();

    assert_eq!(settings.mod_roles, vec!["111".to_string(), "222".to_string()]);
    assert!(settings.updated_at.is_some());

    Ok(())
}
