//! Discord server domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::server::{CreateServerDto, ServerDto};

/// Discord server registered on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    /// Discord guild ID.
    pub id: String,
    pub name: String,
    pub icon_url: Option<String>,
    /// Dashboard user who manages this server.
    pub owner_id: String,
    pub member_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Server {
    pub fn from_entity(entity: entity::server::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            icon_url: entity.icon_url,
            owner_id: entity.owner_id,
            member_count: entity.member_count,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ServerDto {
        ServerDto {
            id: self.id,
            name: self.name,
            icon_url: self.icon_url,
            owner_id: self.owner_id,
            member_count: self.member_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for registering a server or refreshing its metadata.
///
/// The owner is only written when the row is first created.
#[derive(Debug, Clone)]
pub struct UpsertServerParam {
    pub id: String,
    pub name: String,
    pub icon_url: Option<String>,
    pub owner_id: String,
    pub member_count: i32,
}

impl UpsertServerParam {
    pub fn from_dto(owner_id: String, dto: CreateServerDto) -> Self {
        Self {
            id: dto.id.trim().to_string(),
            name: dto.name.trim().to_string(),
            icon_url: dto.icon_url,
            owner_id,
            member_count: dto.member_count,
        }
    }
}
