use super::*;

/// Tests finding an existing user by email.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(param("bob@example.com")).await?;

    let found = repo.find_by_email("bob@example.com").await?;

    assert_eq!(found.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests looking up an email nobody registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = UserRepository::new(db)
        .find_by_email("nobody@example.com")
        .await?;

    assert!(found.is_none());

    Ok(())
}
