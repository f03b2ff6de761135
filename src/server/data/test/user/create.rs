use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository assigns a UUID and stores the supplied fields.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(param("alice@example.com")).await?;

    assert!(uuid::Uuid::parse_str(&user.id).is_ok());
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.first_name.as_deref(), Some("Alice"));
    assert!(user.profile_image_url.is_none());

    Ok(())
}

/// Tests that a second registration with the same email is rejected by the store.
///
/// Verifies the unique index surfaces as a unique constraint violation and that
/// only one row exists afterwards.
///
/// Expected: Err with UniqueConstraintViolation, one user row
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("alice@example.com")).await?;
    let result = repo.create(param("alice@example.com")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
