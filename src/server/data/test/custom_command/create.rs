use super::*;

/// Tests creating a command and finding it by name.
///
/// Expected: Ok with a zero usage count and the allowed roles round-tripped
#[tokio::test]
async fn creates_command() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;

    let repo = CustomCommandRepository::new(db);
    let command = repo
        .create(CreateCustomCommandParam {
            server_id: server.id.clone(),
            name: "rules".to_string(),
            description: None,
            response: "Be nice.".to_string(),
            embed_enabled: false,
            embed_color: "#5865F2".to_string(),
            allowed_roles: vec!["10".to_string()],
            cooldown: 0,
            enabled: true,
        })
        .await?;

    assert_eq!(command.usage_count, 0);
    assert_eq!(command.allowed_roles, vec!["10".to_string()]);

    let found = repo.find_by_name(&server.id, "rules").await?.unwrap();
    assert_eq!(found.id, command.id);
    assert!(repo.find_by_name(&server.id, "other").await?.is_none());

    Ok(())
}
