use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerAnalyticsDto {
    pub server_id: String,
    pub date: NaiveDate,
    pub member_count: i32,
    pub message_count: i32,
    pub commands_used: i32,
    pub tickets_created: i32,
    pub mod_actions_count: i32,
    pub active_members: i32,
}

/// Daily counters; a second submission for the same day replaces the first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpsertAnalyticsDto {
    /// Defaults to today (UTC).
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub member_count: i32,
    #[serde(default)]
    pub message_count: i32,
    #[serde(default)]
    pub commands_used: i32,
    #[serde(default)]
    pub tickets_created: i32,
    #[serde(default)]
    pub mod_actions_count: i32,
    #[serde(default)]
    pub active_members: i32,
}
