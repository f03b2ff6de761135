use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{mod_action::ModActionDto, ticket::TicketDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_servers: u64,
    pub total_members: i64,
    pub open_tickets: u64,
    pub mod_actions_today: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardActivityDto {
    pub mod_actions: Vec<ModActionDto>,
    pub tickets: Vec<TicketDto>,
}
