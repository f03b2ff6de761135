//! Moderation audit record domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::mod_action::{CreateModActionDto, ModActionDto},
    server::error::AppError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModActionType {
    Ban,
    Kick,
    Mute,
    Warn,
}

impl ModActionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ban => "ban",
            Self::Kick => "kick",
            Self::Mute => "mute",
            Self::Warn => "warn",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "ban" => Ok(Self::Ban),
            "kick" => Ok(Self::Kick),
            "mute" => Ok(Self::Mute),
            "warn" => Ok(Self::Warn),
            _ => Err(AppError::bad_request(
                "actionType must be one of ban, kick, mute, warn",
            )),
        }
    }
}

/// Immutable record of a moderation event.
#[derive(Debug, Clone, PartialEq)]
pub struct ModAction {
    pub id: String,
    pub server_id: String,
    pub action_type: String,
    pub target_id: String,
    pub target_name: String,
    pub moderator_id: String,
    pub moderator_name: String,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ModAction {
    pub fn from_entity(entity: entity::mod_action::Model) -> Self {
        Self {
            id: entity.id,
            server_id: entity.server_id,
            action_type: entity.action_type,
            target_id: entity.target_id,
            target_name: entity.target_name,
            moderator_id: entity.moderator_id,
            moderator_name: entity.moderator_name,
            reason: entity.reason,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ModActionDto {
        ModActionDto {
            id: self.id,
            server_id: self.server_id,
            action_type: self.action_type,
            target_id: self.target_id,
            target_name: self.target_name,
            moderator_id: self.moderator_id,
            moderator_name: self.moderator_name,
            reason: self.reason,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateModActionParam {
    pub server_id: String,
    pub action_type: ModActionType,
    pub target_id: String,
    pub target_name: String,
    pub moderator_id: String,
    pub moderator_name: String,
    pub reason: Option<String>,
}

impl CreateModActionParam {
    /// Converts the request body, rejecting unknown action types.
    pub fn from_dto(server_id: String, dto: CreateModActionDto) -> Result<Self, AppError> {
        Ok(Self {
            server_id,
            action_type: ModActionType::parse(&dto.action_type)?,
            target_id: dto.target_id,
            target_name: dto.target_name,
            moderator_id: dto.moderator_id,
            moderator_name: dto.moderator_name,
            reason: dto.reason.filter(|r| !r.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_action_types() {
        for action in ["ban", "kick", "mute", "warn"] {
            assert_eq!(ModActionType::parse(action).unwrap().as_str(), action);
        }
        assert!(ModActionType::parse("timeout").is_err());
    }
}
