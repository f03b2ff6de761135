use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketDto {
    pub id: String,
    pub server_id: String,
    pub channel_id: String,
    pub creator_id: String,
    pub creator_name: String,
    /// `open` or `closed`.
    pub status: String,
    pub subject: Option<String>,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTicketDto {
    pub channel_id: String,
    pub creator_id: String,
    pub creator_name: String,
    pub subject: Option<String>,
}
