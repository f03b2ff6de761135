//! Reaction role factory.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a reaction role binding at the given time.
pub async fn create_reaction_role_at(
    db: &DatabaseConnection,
    server_id: &str,
    created_at: DateTime<Utc>,
) -> Result<entity::reaction_role::Model, DbErr> {
    entity::reaction_role::ActiveModel {
        id: ActiveValue::Set(new_uuid()),
        server_id: ActiveValue::Set(server_id.to_string()),
        message_id: ActiveValue::Set(next_id().to_string()),
        channel_id: ActiveValue::Set(next_id().to_string()),
        emoji: ActiveValue::Set("✅".to_string()),
        role_id: ActiveValue::Set(next_id().to_string()),
        created_at: ActiveValue::Set(created_at),
    }
    .insert(db)
    .await
}

/// Creates a reaction role binding now.
pub async fn create_reaction_role(
    db: &DatabaseConnection,
    server_id: &str,
) -> Result<entity::reaction_role::Model, DbErr> {
    create_reaction_role_at(db, server_id, Utc::now()).await
}
