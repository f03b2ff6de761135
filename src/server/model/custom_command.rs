//! Custom command domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::custom_command::{CreateCustomCommandDto, CustomCommandDto, UpdateCustomCommandDto},
    server::{model::settings::DEFAULT_EMBED_COLOR, util::parse::parse_string_list},
};

/// Text command defined by server staff and answered by the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomCommand {
    pub id: String,
    pub server_id: String,
    pub name: String,
    pub description: Option<String>,
    pub response: String,
    pub embed_enabled: bool,
    pub embed_color: String,
    pub allowed_roles: Vec<String>,
    pub cooldown: i32,
    pub enabled: bool,
    pub usage_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CustomCommand {
    pub fn from_entity(entity: entity::custom_command::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            server_id: entity.server_id,
            name: entity.name,
            description: entity.description,
            response: entity.response,
            embed_enabled: entity.embed_enabled,
            embed_color: entity.embed_color,
            allowed_roles: parse_string_list(entity.allowed_roles)?,
            cooldown: entity.cooldown,
            enabled: entity.enabled,
            usage_count: entity.usage_count,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> CustomCommandDto {
        CustomCommandDto {
            id: self.id,
            server_id: self.server_id,
            name: self.name,
            description: self.description,
            response: self.response,
            embed_enabled: self.embed_enabled,
            embed_color: self.embed_color,
            allowed_roles: self.allowed_roles,
            cooldown: self.cooldown,
            enabled: self.enabled,
            usage_count: self.usage_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCustomCommandParam {
    pub server_id: String,
    pub name: String,
    pub description: Option<String>,
    pub response: String,
    pub embed_enabled: bool,
    pub embed_color: String,
    pub allowed_roles: Vec<String>,
    pub cooldown: i32,
    pub enabled: bool,
}

impl CreateCustomCommandParam {
    /// Fills unspecified options with their defaults. Names are stored lowercase.
    pub fn from_dto(server_id: String, dto: CreateCustomCommandDto) -> Self {
        Self {
            server_id,
            name: dto.name.trim().to_lowercase(),
            description: dto.description,
            response: dto.response,
            embed_enabled: dto.embed_enabled.unwrap_or(false),
            embed_color: dto
                .embed_color
                .unwrap_or_else(|| DEFAULT_EMBED_COLOR.to_string()),
            allowed_roles: dto.allowed_roles.unwrap_or_default(),
            cooldown: dto.cooldown.unwrap_or(0),
            enabled: dto.enabled.unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCustomCommandParam {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub response: Option<String>,
    pub embed_enabled: Option<bool>,
    pub embed_color: Option<String>,
    pub allowed_roles: Option<Vec<String>>,
    pub cooldown: Option<i32>,
    pub enabled: Option<bool>,
}

impl UpdateCustomCommandParam {
    pub fn from_dto(dto: UpdateCustomCommandDto) -> Self {
        Self {
            name: dto.name.map(|name| name.trim().to_lowercase()),
            description: dto.description,
            response: dto.response,
            embed_enabled: dto.embed_enabled,
            embed_color: dto.embed_color,
            allowed_roles: dto.allowed_roles,
            cooldown: dto.cooldown,
            enabled: dto.enabled,
        }
    }
}
