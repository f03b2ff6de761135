use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReactionRoleDto {
    pub id: String,
    pub server_id: String,
    pub message_id: String,
    pub channel_id: String,
    pub emoji: String,
    pub role_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateReactionRoleDto {
    pub message_id: String,
    pub channel_id: String,
    pub emoji: String,
    pub role_id: String,
}
