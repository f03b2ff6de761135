use sea_orm::DatabaseConnection;

use crate::server::{
    data::log_event::LogEventRepository,
    error::AppError,
    model::log_event::{effective_limit, CreateLogEventParam, LogEvent},
    util::validate,
};

pub struct LogEventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LogEventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateLogEventParam) -> Result<LogEvent, AppError> {
        validate::require_non_empty("eventType", &param.event_type)?;
        validate::max_length("eventType", &param.event_type, 30)?;

        Ok(LogEventRepository::new(self.db).create(param).await?)
    }

    /// Gets a server's newest events; `limit` defaults to 50 and is capped at 200.
    pub async fn get_by_server(
        &self,
        server_id: &str,
        limit: Option<u64>,
    ) -> Result<Vec<LogEvent>, AppError> {
        Ok(LogEventRepository::new(self.db)
            .get_by_server(server_id, effective_limit(limit))
            .await?)
    }
}
