use super::*;

/// Tests that two increments add two uses.
///
/// Expected: Ok with usage count raised by exactly two
#[tokio::test]
async fn increments_in_place() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;
    let command = factory::custom_command::CustomCommandFactory::new(db, &server.id)
        .usage_count(3)
        .build()
        .await?;

    let repo = CustomCommandRepository::new(db);
    repo.increment_usage(&command.id).await?;
    let after = repo.increment_usage(&command.id).await?.unwrap();

    assert_eq!(after.usage_count, 5);

    Ok(())
}

/// Tests incrementing a command that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_command() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let result = CustomCommandRepository::new(db)
        .increment_usage("missing")
        .await?;

    assert!(result.is_none());

    Ok(())
}
