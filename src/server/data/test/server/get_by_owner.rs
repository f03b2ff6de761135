use super::*;

/// Tests that only the owner's servers are returned.
///
/// Expected: Ok with the two servers of owner-1
#[tokio::test]
async fn returns_only_owned_servers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::server::ServerFactory::new(db)
        .owner_id("owner-1")
        .name("Beta")
        .build()
        .await?;
    factory::server::ServerFactory::new(db)
        .owner_id("owner-1")
        .name("Alpha")
        .build()
        .await?;
    factory::server::ServerFactory::new(db)
        .owner_id("owner-2")
        .build()
        .await?;

    let servers = ServerRepository::new(db).get_by_owner("owner-1").await?;

    let names: Vec<_> = servers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);

    Ok(())
}
