//! Custom command factory.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test custom commands.
pub struct CustomCommandFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: String,
    name: String,
    usage_count: i32,
}

impl<'a> CustomCommandFactory<'a> {
    /// Defaults to an enabled plain-text command named `cmd{n}`.
    pub fn new(db: &'a DatabaseConnection, server_id: &str) -> Self {
        Self {
            db,
            server_id: server_id.to_string(),
            name: format!("cmd{}", next_id()),
            usage_count: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn usage_count(mut self, usage_count: i32) -> Self {
        self.usage_count = usage_count;
        self
    }

    pub async fn build(self) -> Result<entity::custom_command::Model, DbErr> {
        let now = Utc::now();
        entity::custom_command::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            server_id: ActiveValue::Set(self.server_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            response: ActiveValue::Set("Hello!".to_string()),
            embed_enabled: ActiveValue::Set(false),
            embed_color: ActiveValue::Set("#5865F2".to_string()),
            allowed_roles: ActiveValue::Set(serde_json::json!([])),
            cooldown: ActiveValue::Set(0),
            enabled: ActiveValue::Set(true),
            usage_count: ActiveValue::Set(self.usage_count),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a custom command with default values.
pub async fn create_custom_command(
    db: &DatabaseConnection,
    server_id: &str,
) -> Result<entity::custom_command::Model, DbErr> {
    CustomCommandFactory::new(db, server_id).build().await
}
