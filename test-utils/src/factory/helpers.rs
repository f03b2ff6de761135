//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a fresh UUID string for entities keyed by UUID.
pub fn new_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Creates a user and a server owned by that user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, server))` - Created owner and server
/// - `Err(DbErr)` - Database error during creation
pub async fn create_server_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::server::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let server = crate::factory::server::ServerFactory::new(db)
        .owner_id(&user.id)
        .build()
        .await?;

    Ok((user, server))
}
