//! Ticket factory for creating test support tickets.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tickets.
///
/// The server referenced by `server_id` must already exist.
pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: String,
    creator_name: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> TicketFactory<'a> {
    /// Creates a new TicketFactory with default values.
    ///
    /// Defaults:
    /// - status: `"open"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, server_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            server_id: server_id.to_string(),
            creator_name: format!("Member {}", id),
            status: "open".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the ticket entity into the database.
    pub async fn build(self) -> Result<entity::ticket::Model, DbErr> {
        let closed_at = (self.status == "closed").then_some(self.created_at);
        entity::ticket::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            server_id: ActiveValue::Set(self.server_id),
            channel_id: ActiveValue::Set(next_id().to_string()),
            creator_id: ActiveValue::Set(next_id().to_string()),
            creator_name: ActiveValue::Set(self.creator_name),
            status: ActiveValue::Set(self.status),
            subject: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            closed_at: ActiveValue::Set(closed_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open ticket for the given server.
pub async fn create_ticket(
    db: &DatabaseConnection,
    server_id: &str,
) -> Result<entity::ticket::Model, DbErr> {
    TicketFactory::new(db, server_id).build().await
}
