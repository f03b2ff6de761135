//! Reaction role binding domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::reaction_role::{CreateReactionRoleDto, ReactionRoleDto};

/// Grants `role_id` to members who react with `emoji` on `message_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionRole {
    pub id: String,
    pub server_id: String,
    pub message_id: String,
    pub channel_id: String,
    pub emoji: String,
    pub role_id: String,
    pub created_at: DateTime<Utc>,
}

impl ReactionRole {
    pub fn from_entity(entity: entity::reaction_role::Model) -> Self {
        Self {
            id: entity.id,
            server_id: entity.server_id,
            message_id: entity.message_id,
            channel_id: entity.channel_id,
            emoji: entity.emoji,
            role_id: entity.role_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ReactionRoleDto {
        ReactionRoleDto {
            id: self.id,
            server_id: self.server_id,
            message_id: self.message_id,
            channel_id: self.channel_id,
            emoji: self.emoji,
            role_id: self.role_id,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReactionRoleParam {
    pub server_id: String,
    pub message_id: String,
    pub channel_id: String,
    pub emoji: String,
    pub role_id: String,
}

impl CreateReactionRoleParam {
    pub fn from_dto(server_id: String, dto: CreateReactionRoleDto) -> Self {
        Self {
            server_id,
            message_id: dto.message_id,
            channel_id: dto.channel_id,
            emoji: dto.emoji.trim().to_string(),
            role_id: dto.role_id,
        }
    }
}
