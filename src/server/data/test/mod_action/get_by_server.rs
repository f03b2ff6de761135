use super::*;

/// Tests that a server's moderation actions come back newest first.
///
/// Expected: Ok with actions ordered by creation time descending
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;
    let now = Utc::now();

    let middle = factory::mod_action::ModActionFactory::new(db, &server.id)
        .action_type("kick")
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    let oldest = factory::mod_action::ModActionFactory::new(db, &server.id)
        .action_type("ban")
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let newest = factory::mod_action::ModActionFactory::new(db, &server.id)
        .created_at(now - Duration::minutes(1))
        .build()
        .await?;

    let actions = ModActionRepository::new(db).get_by_server(&server.id).await?;

    let ids: Vec<&str> = actions.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![newest.id.as_str(), middle.id.as_str(), oldest.id.as_str()]
    );

    Ok(())
}

/// Tests that actions from other servers are excluded.
///
/// Expected: Ok with only the requested server's action
#[tokio::test]
async fn excludes_other_servers() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;
    let other = factory::create_server(db).await?;

    let own = factory::create_mod_action(db, &server.id).await?;
    factory::create_mod_action(db, &other.id).await?;

    let actions = ModActionRepository::new(db).get_by_server(&server.id).await?;

    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].id, own.id);
    assert_eq!(actions[0].server_id, server.id);

    Ok(())
}
