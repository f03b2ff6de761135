//! Owner-scoped dashboard aggregates.

use crate::{
    model::dashboard::{DashboardActivityDto, DashboardStatsDto},
    server::model::{mod_action::ModAction, ticket::Ticket},
};

/// Number of entries of each kind in the activity feed.
pub const ACTIVITY_FEED_LIMIT: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_servers: u64,
    pub total_members: i64,
    pub open_tickets: u64,
    /// Mod actions since 00:00 UTC today.
    pub mod_actions_today: u64,
}

impl DashboardStats {
    pub fn into_dto(self) -> DashboardStatsDto {
        DashboardStatsDto {
            total_servers: self.total_servers,
            total_members: self.total_members,
            open_tickets: self.open_tickets,
            mod_actions_today: self.mod_actions_today,
        }
    }
}

/// Most recent mod actions and tickets across all of an owner's servers.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardActivity {
    pub mod_actions: Vec<ModAction>,
    pub tickets: Vec<Ticket>,
}

impl DashboardActivity {
    pub fn into_dto(self) -> DashboardActivityDto {
        DashboardActivityDto {
            mod_actions: self.mod_actions.into_iter().map(ModAction::into_dto).collect(),
            tickets: self.tickets.into_iter().map(Ticket::into_dto).collect(),
        }
    }
}
