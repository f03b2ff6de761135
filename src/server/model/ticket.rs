//! Support ticket domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::ticket::{CreateTicketDto, TicketDto};

/// Lifecycle state of a ticket.
///
/// Tickets move from `Open` to `Closed`; closing an already closed ticket only
/// refreshes its close timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Open,
    Closed,
}

impl TicketStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: String,
    pub server_id: String,
    pub channel_id: String,
    pub creator_id: String,
    pub creator_name: String,
    pub status: String,
    pub subject: Option<String>,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl Ticket {
    pub fn from_entity(entity: entity::ticket::Model) -> Self {
        Self {
            id: entity.id,
            server_id: entity.server_id,
            channel_id: entity.channel_id,
            creator_id: entity.creator_id,
            creator_name: entity.creator_name,
            status: entity.status,
            subject: entity.subject,
            created_at: entity.created_at,
            closed_at: entity.closed_at,
        }
    }

    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            id: self.id,
            server_id: self.server_id,
            channel_id: self.channel_id,
            creator_id: self.creator_id,
            creator_name: self.creator_name,
            status: self.status,
            subject: self.subject,
            created_at: self.created_at,
            closed_at: self.closed_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTicketParam {
    pub server_id: String,
    pub channel_id: String,
    pub creator_id: String,
    pub creator_name: String,
    pub subject: Option<String>,
}

impl CreateTicketParam {
    pub fn from_dto(server_id: String, dto: CreateTicketDto) -> Self {
        Self {
            server_id,
            channel_id: dto.channel_id,
            creator_id: dto.creator_id,
            creator_name: dto.creator_name,
            subject: dto.subject.filter(|s| !s.trim().is_empty()),
        }
    }
}
