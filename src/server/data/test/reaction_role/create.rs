use super::*;

/// Tests creating a binding and listing bindings newest first.
///
/// Expected: Ok with the new binding ahead of an older one
#[tokio::test]
async fn creates_and_lists_newest_first() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;
    let older =
        factory::reaction_role::create_reaction_role_at(db, &server.id, Utc::now() - Duration::days(1))
            .await?;

    let repo = ReactionRoleRepository::new(db);
    let created = repo
        .create(CreateReactionRoleParam {
            server_id: server.id.clone(),
            message_id: "m1".to_string(),
            channel_id: "c1".to_string(),
            emoji: "🎮".to_string(),
            role_id: "r1".to_string(),
        })
        .await?;

    assert_eq!(created.emoji, "🎮");

    let bindings = repo.get_by_server(&server.id).await?;
    let ids: Vec<&str> = bindings.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec![created.id.as_str(), older.id.as_str()]);

    Ok(())
}
