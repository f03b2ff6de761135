use super::*;

/// Tests storing join roles and then enabling verification.
///
/// Expected: Ok with join roles preserved across the second write
#[tokio::test]
async fn merges_auto_role_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .with_table(entity::prelude::AutoRoleSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;

    let repo = AutoRoleSettingsRepository::new(db);
    repo.upsert(
        &server.id,
        UpdateAutoRoleSettingsParam {
            enabled: Some(true),
            join_roles: Some(vec!["1".to_string(), "2".to_string()]),
            ..Default::default()
        },
    )
    .await?;
    let settings = repo
        .upsert(
            &server.id,
            UpdateAutoRoleSettingsParam {
                verification_enabled: Some(true),
                verified_role_id: Some(Some("3".to_string())),
                ..Default::default()
            },
        )
        .await?;

    assert!(settings.enabled);
    assert_eq!(settings.join_roles, vec!["1".to_string(), "2".to_string()]);
    assert!(settings.verification_enabled);
    assert_eq!(settings.verified_role_id.as_deref(), Some("3"));
    assert!(!settings.reaction_roles_enabled);

    Ok(())
}
