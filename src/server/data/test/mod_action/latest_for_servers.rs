use super::*;

/// Tests the activity feed query across servers.
///
/// Expected: Ok with at most `limit` actions, newest first, from listed servers only
#[tokio::test]
async fn returns_latest_actions_across_servers() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let first = factory::create_server(db).await?;
    let second = factory::create_server(db).await?;
    let unlisted = factory::create_server(db).await?;
    let now = Utc::now();

    for minutes in [30, 20, 10] {
        factory::mod_action::ModActionFactory::new(db, &first.id)
            .created_at(now - Duration::minutes(minutes))
            .build()
            .await?;
    }
    let newest = factory::mod_action::ModActionFactory::new(db, &second.id)
        .created_at(now - Duration::minutes(1))
        .build()
        .await?;
    factory::create_mod_action(db, &unlisted.id).await?;

    let actions = ModActionRepository::new(db)
        .latest_for_servers(&[first.id.clone(), second.id.clone()], 2)
        .await?;

    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0].id, newest.id);
    assert_eq!(actions[1].server_id, first.id);
    assert!(actions[0].created_at >= actions[1].created_at);

    Ok(())
}
