use super::*;

/// Tests recording a moderation action and reading it back.
///
/// Expected: Ok with the action listed for its server
#[tokio::test]
async fn records_action() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;

    let repo = ModActionRepository::new(db);
    let action = repo
        .create(CreateModActionParam {
            server_id: server.id.clone(),
            action_type: ModActionType::Warn,
            target_id: "target".to_string(),
            target_name: "Target".to_string(),
            moderator_id: "mod".to_string(),
            moderator_name: "Mod".to_string(),
            reason: Some("spam".to_string()),
        })
        .await?;

    assert_eq!(action.action_type, "warn");

    let actions = repo.get_by_server(&server.id).await?;
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].id, action.id);
    assert_eq!(actions[0].reason.as_deref(), Some("spam"));

    Ok(())
}
