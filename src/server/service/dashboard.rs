//! Aggregates over every server the caller owns.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{mod_action::ModActionRepository, server::ServerRepository, ticket::TicketRepository},
    error::AppError,
    model::dashboard::{DashboardActivity, DashboardStats, ACTIVITY_FEED_LIMIT},
    util::parse::start_of_day,
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Summary counters for the owner's servers; "today" starts at 00:00 UTC.
    pub async fn stats(&self, owner_id: &str) -> Result<DashboardStats, AppError> {
        self.stats_at(owner_id, Utc::now()).await
    }

    /// Computes the summary counters as of `now`.
    ///
    /// Runs one query per counter over the owner's server ids rather than one per server.
    ///
    /// # Returns
    /// - `Ok(DashboardStats)` - All zeros when the owner has no servers
    /// - `Err(AppError)` - Database error
    pub async fn stats_at(
        &self,
        owner_id: &str,
        now: DateTime<Utc>,
    ) -> Result<DashboardStats, AppError> {
        let servers = ServerRepository::new(self.db).get_by_owner(owner_id).await?;

        let total_members = servers.iter().map(|s| i64::from(s.member_count)).sum();
        let server_ids: Vec<String> = servers.into_iter().map(|s| s.id).collect();

        let open_tickets = TicketRepository::new(self.db)
            .count_open_for_servers(&server_ids)
            .await?;
        let mod_actions_today = ModActionRepository::new(self.db)
            .count_since_for_servers(&server_ids, start_of_day(now))
            .await?;

        Ok(DashboardStats {
            total_servers: server_ids.len() as u64,
            total_members,
            open_tickets,
            mod_actions_today,
        })
    }

    /// The newest mod actions and tickets across the owner's servers.
    pub async fn activity(&self, owner_id: &str) -> Result<DashboardActivity, AppError> {
        let server_ids: Vec<String> = ServerRepository::new(self.db)
            .get_by_owner(owner_id)
            .await?
            .into_iter()
            .map(|s| s.id)
            .collect();

        let mod_actions = ModActionRepository::new(self.db)
            .latest_for_servers(&server_ids, ACTIVITY_FEED_LIMIT)
            .await?;
        let tickets = TicketRepository::new(self.db)
            .latest_for_servers(&server_ids, ACTIVITY_FEED_LIMIT)
            .await?;

        Ok(DashboardActivity {
            mod_actions,
            tickets,
        })
    }
}
