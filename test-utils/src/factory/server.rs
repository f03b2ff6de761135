//! Server factory for creating test Discord server entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test servers with customizable fields.
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    owner_id: String,
    member_count: i32,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented numeric string (a fake guild ID)
    /// - name: `"Server {id}"`
    /// - owner_id: `"owner"`
    /// - member_count: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: (100_000_000_000 + id).to_string(),
            name: format!("Server {}", id),
            owner_id: "owner".to_string(),
            member_count: 0,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = owner_id.into();
        self
    }

    pub fn member_count(mut self, member_count: i32) -> Self {
        self.member_count = member_count;
        self
    }

    /// Builds and inserts the server entity into the database.
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        let now = Utc::now();
        entity::server::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            icon_url: ActiveValue::Set(None),
            owner_id: ActiveValue::Set(self.owner_id),
            member_count: ActiveValue::Set(self.member_count),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server with default values.
pub async fn create_server(db: &DatabaseConnection) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db).build().await
}
