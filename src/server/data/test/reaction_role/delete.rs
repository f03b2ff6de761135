use super::*;

/// Tests deleting a binding.
///
/// Expected: Ok(true) then Ok(false), other bindings untouched
#[tokio::test]
async fn deletes_only_target_binding() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;
    let target = factory::create_reaction_role(db, &server.id).await?;
    let kept = factory::create_reaction_role(db, &server.id).await?;

    let repo = ReactionRoleRepository::new(db);

    assert!(repo.delete(&target.id).await?);
    assert!(!repo.delete(&target.id).await?);
    assert!(repo.find_by_id(&kept.id).await?.is_some());

    Ok(())
}
