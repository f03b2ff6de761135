use super::*;

/// Tests registering a server that does not exist yet.
///
/// Expected: Ok with server stored under the given owner
#[tokio::test]
async fn creates_server() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = ServerRepository::new(db)
        .upsert(UpsertServerParam {
            id: "123456789".to_string(),
            name: "Zyx HQ".to_string(),
            icon_url: None,
            owner_id: "owner-1".to_string(),
            member_count: 42,
        })
        .await?
        .unwrap();

    assert_eq!(server.id, "123456789");
    assert_eq!(server.owner_id, "owner-1");
    assert_eq!(server.member_count, 42);

    Ok(())
}

/// Tests that the owner re-registering a server refreshes its metadata.
///
/// Expected: Ok with new name, icon and member count, same owner
#[tokio::test]
async fn updates_metadata_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::server::ServerFactory::new(db)
        .owner_id("owner-1")
        .build()
        .await?;

    let server = ServerRepository::new(db)
        .upsert(UpsertServerParam {
            id: existing.id.clone(),
            name: "Renamed".to_string(),
            icon_url: Some("https://cdn.example.com/icon.png".to_string()),
            owner_id: "owner-1".to_string(),
            member_count: 7,
        })
        .await?
        .unwrap();

    assert_eq!(server.name, "Renamed");
    assert_eq!(server.icon_url.as_deref(), Some("https://cdn.example.com/icon.png"));
    assert_eq!(server.member_count, 7);
    assert_eq!(server.owner_id, "owner-1");

    Ok(())
}

/// Tests registering a server id that another user already owns.
///
/// Expected: Ok(None) and the stored row keeps its name, member count and owner
#[tokio::test]
async fn leaves_other_owners_server_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::server::ServerFactory::new(db)
        .owner_id("owner-1")
        .name("Original")
        .member_count(10)
        .build()
        .await?;

    let repo = ServerRepository::new(db);
    let result = repo
        .upsert(UpsertServerParam {
            id: existing.id.clone(),
            name: "Hijacked".to_string(),
            icon_url: Some("https://cdn.example.com/other.png".to_string()),
            owner_id: "owner-2".to_string(),
            member_count: 999,
        })
        .await?;

    assert!(result.is_none());

    let stored = repo.find_by_id(&existing.id).await?.unwrap();
    assert_eq!(stored.name, "Original");
    assert_eq!(stored.member_count, 10);
    assert_eq!(stored.owner_id, "owner-1");
    assert_eq!(stored.icon_url, existing.icon_url);

    Ok(())
}
