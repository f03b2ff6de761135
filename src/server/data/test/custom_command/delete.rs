use super::*;

/// Tests deleting a command.
///
/// Expected: Ok(true) the first time and Ok(false) once it is gone
#[tokio::test]
async fn deletes_command_once() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;
    let command = factory::create_custom_command(db, &server.id).await?;

    let repo = CustomCommandRepository::new(db);

    assert!(repo.delete(&command.id).await?);
    assert!(!repo.delete(&command.id).await?);
    assert!(repo.find_by_id(&command.id).await?.is_none());

    Ok(())
}
