//! Moderation action data repository.
//!
//! Mod actions are an append-only audit log: rows are inserted and read, never
//! updated or deleted through the API.

use crate::server::model::mod_action::{CreateModActionParam, ModAction};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct ModActionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModActionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a moderation action.
    pub async fn create(&self, param: CreateModActionParam) -> Result<ModAction, DbErr> {
        let entity = entity::mod_action::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            server_id: ActiveValue::Set(param.server_id),
            action_type: ActiveValue::Set(param.action_type.as_str().to_string()),
            target_id: ActiveValue::Set(param.target_id),
            target_name: ActiveValue::Set(param.target_name),
            moderator_id: ActiveValue::Set(param.moderator_id),
            moderator_name: ActiveValue::Set(param.moderator_name),
            reason: ActiveValue::Set(param.reason),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(ModAction::from_entity(entity))
    }

    /// Gets all moderation actions for a server, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<ModAction>)` - Actions ordered by `created_at` descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_server(&self, server_id: &str) -> Result<Vec<ModAction>, DbErr> {
        let entities = entity::prelude::ModAction::find()
            .filter(entity::mod_action::Column::ServerId.eq(server_id))
            .order_by_desc(entity::mod_action::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ModAction::from_entity).collect())
    }

    /// Counts actions recorded at or after `since` across the given servers.
    pub async fn count_since_for_servers(
        &self,
        server_ids: &[String],
        since: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        if server_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::ModAction::find()
            .filter(entity::mod_action::Column::ServerId.is_in(server_ids.iter().cloned()))
            .filter(entity::mod_action::Column::CreatedAt.gte(since))
            .count(self.db)
            .await
    }

    /// Gets the most recent actions across the given servers, newest first.
    pub async fn latest_for_servers(
        &self,
        server_ids: &[String],
        limit: u64,
    ) -> Result<Vec<ModAction>, DbErr> {
        if server_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::ModAction::find()
            .filter(entity::mod_action::Column::ServerId.is_in(server_ids.iter().cloned()))
            .order_by_desc(entity::mod_action::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ModAction::from_entity).collect())
    }
}
