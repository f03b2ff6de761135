use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::double_option;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomCommandDto {
    pub id: String,
    pub server_id: String,
    pub name: String,
    pub description: Option<String>,
    pub response: String,
    pub embed_enabled: bool,
    pub embed_color: String,
    /// Empty means every member may use the command.
    pub allowed_roles: Vec<String>,
    /// Seconds between uses per member.
    pub cooldown: i32,
    pub enabled: bool,
    pub usage_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateCustomCommandDto {
    pub name: String,
    pub description: Option<String>,
    pub response: String,
    pub embed_enabled: Option<bool>,
    pub embed_color: Option<String>,
    pub allowed_roles: Option<Vec<String>>,
    pub cooldown: Option<i32>,
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCustomCommandDto {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    pub response: Option<String>,
    pub embed_enabled: Option<bool>,
    pub embed_color: Option<String>,
    pub allowed_roles: Option<Vec<String>>,
    pub cooldown: Option<i32>,
    pub enabled: Option<bool>,
}
