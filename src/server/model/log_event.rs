//! Server log event domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::log_event::{CreateLogEventDto, LogEventDto};

/// Number of events returned when the client does not ask for a limit.
pub const DEFAULT_LOG_EVENT_LIMIT: u64 = 50;
/// Upper bound on the number of events returned in one request.
pub const MAX_LOG_EVENT_LIMIT: u64 = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    pub id: String,
    pub server_id: String,
    /// Free-form event kind such as `member_join` or `message_delete`.
    pub event_type: String,
    pub actor_id: Option<String>,
    pub actor_name: Option<String>,
    pub target_id: Option<String>,
    pub target_name: Option<String>,
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LogEvent {
    pub fn from_entity(entity: entity::log_event::Model) -> Self {
        Self {
            id: entity.id,
            server_id: entity.server_id,
            event_type: entity.event_type,
            actor_id: entity.actor_id,
            actor_name: entity.actor_name,
            target_id: entity.target_id,
            target_name: entity.target_name,
            details: entity.details,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> LogEventDto {
        LogEventDto {
            id: self.id,
            server_id: self.server_id,
            event_type: self.event_type,
            actor_id: self.actor_id,
            actor_name: self.actor_name,
            target_id: self.target_id,
            target_name: self.target_name,
            details: self.details,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLogEventParam {
    pub server_id: String,
    pub event_type: String,
    pub actor_id: Option<String>,
    pub actor_name: Option<String>,
    pub target_id: Option<String>,
    pub target_name: Option<String>,
    pub details: Option<String>,
}

impl CreateLogEventParam {
    pub fn from_dto(server_id: String, dto: CreateLogEventDto) -> Self {
        Self {
            server_id,
            event_type: dto.event_type.trim().to_string(),
            actor_id: dto.actor_id,
            actor_name: dto.actor_name,
            target_id: dto.target_id,
            target_name: dto.target_name,
            details: dto.details,
        }
    }
}

/// Clamps a requested page size into `1..=MAX_LOG_EVENT_LIMIT`.
pub fn effective_limit(requested: Option<u64>) -> u64 {
    requested
        .unwrap_or(DEFAULT_LOG_EVENT_LIMIT)
        .clamp(1, MAX_LOG_EVENT_LIMIT)
}
