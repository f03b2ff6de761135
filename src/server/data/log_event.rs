//! Server log event data repository.

use crate::server::model::log_event::{CreateLogEventParam, LogEvent};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct LogEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LogEventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateLogEventParam) -> Result<LogEvent, DbErr> {
        let entity = entity::log_event::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            server_id: ActiveValue::Set(param.server_id),
            event_type: ActiveValue::Set(param.event_type),
            actor_id: ActiveValue::Set(param.actor_id),
            actor_name: ActiveValue::Set(param.actor_name),
            target_id: ActiveValue::Set(param.target_id),
            target_name: ActiveValue::Set(param.target_name),
            details: ActiveValue::Set(param.details),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(LogEvent::from_entity(entity))
    }

    /// Gets up to `limit` of a server's most recent log events, newest first.
    pub async fn get_by_server(&self, server_id: &str, limit: u64) -> Result<Vec<LogEvent>, DbErr> {
        let entities = entity::prelude::LogEvent::find()
            .filter(entity::log_event::Column::ServerId.eq(server_id))
            .order_by_desc(entity::log_event::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(LogEvent::from_entity).collect())
    }
}
