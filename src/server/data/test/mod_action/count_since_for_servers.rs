use super::*;

/// Tests counting actions recorded since a cutoff.
///
/// Expected: Ok counting only actions at or after the cutoff
#[tokio::test]
async fn counts_actions_after_cutoff() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;
    let cutoff = Utc::now() - Duration::hours(1);

    factory::mod_action::ModActionFactory::new(db, &server.id)
        .created_at(cutoff - Duration::hours(3))
        .build()
        .await?;
    factory::mod_action::ModActionFactory::new(db, &server.id)
        .created_at(cutoff + Duration::minutes(10))
        .build()
        .await?;
    factory::create_mod_action(db, &server.id).await?;

    let count = ModActionRepository::new(db)
        .count_since_for_servers(&[server.id], cutoff)
        .await?;

    assert_eq!(count, 2);

    Ok(())
}
