//! Moderation action factory.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test moderation actions.
///
/// The server referenced by `server_id` must already exist.
pub struct ModActionFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: String,
    action_type: String,
    created_at: DateTime<Utc>,
}

impl<'a> ModActionFactory<'a> {
    /// Defaults to a `warn` issued now.
    pub fn new(db: &'a DatabaseConnection, server_id: &str) -> Self {
        Self {
            db,
            server_id: server_id.to_string(),
            action_type: "warn".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn action_type(mut self, action_type: impl Into<String>) -> Self {
        self.action_type = action_type.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::mod_action::Model, DbErr> {
        let n = next_id();
        entity::mod_action::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            server_id: ActiveValue::Set(self.server_id),
            action_type: ActiveValue::Set(self.action_type),
            target_id: ActiveValue::Set(n.to_string()),
            target_name: ActiveValue::Set(format!("Target {}", n)),
            moderator_id: ActiveValue::Set("1".to_string()),
            moderator_name: ActiveValue::Set("Moderator".to_string()),
            reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a `warn` action issued now for the given server.
pub async fn create_mod_action(
    db: &DatabaseConnection,
    server_id: &str,
) -> Result<entity::mod_action::Model, DbErr> {
    ModActionFactory::new(db, server_id).build().await
}
