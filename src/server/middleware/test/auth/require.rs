use super::*;

/// Tests that the owner of a server passes the ownership check.
///
/// Expected: Ok(())
#[tokio::test]
async fn allows_server_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let server = factory::server::ServerFactory::new(db)
        .owner_id("owner-1")
        .build()
        .await?;

    let caller = identity("owner-1");
    AuthGuard::new(db, &caller)
        .require(&[Permission::ServerOwner(&server.id)])
        .await?;

    Ok(())
}

/// Tests that another user is refused access to the server.
///
/// Expected: Err(AuthError::Forbidden)
#[tokio::test]
async fn forbids_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let server = factory::server::ServerFactory::new(db)
        .owner_id("owner-1")
        .build()
        .await?;

    let caller = identity("intruder");
    let result = AuthGuard::new(db, &caller)
        .require(&[Permission::ServerOwner(&server.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Forbidden))
    ));

    Ok(())
}

/// Tests the check against a server that was never registered.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reports_missing_server() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = identity("owner-1");
    let result = AuthGuard::new(db, &caller)
        .require(&[Permission::ServerOwner("404")])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that every listed permission is checked.
///
/// Expected: Err(AuthError::Forbidden) when only the first server is owned
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owned = factory::server::ServerFactory::new(db)
        .owner_id("owner-1")
        .build()
        .await?;
    let foreign = factory::server::ServerFactory::new(db)
        .owner_id("owner-2")
        .build()
        .await?;

    let caller = identity("owner-1");
    let result = AuthGuard::new(db, &caller)
        .require(&[
            Permission::ServerOwner(&owned.id),
            Permission::ServerOwner(&foreign.id),
        ])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Forbidden))
    ));

    Ok(())
}
