use sea_orm::DatabaseConnection;

use crate::server::{
    data::analytics::ServerAnalyticsRepository,
    error::AppError,
    model::analytics::{DateRange, ServerAnalytics, UpsertAnalyticsParam},
    util::validate,
};

pub struct AnalyticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets daily rows for an inclusive date range, oldest first.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - `start` is after `end`
    pub async fn get_range(
        &self,
        server_id: &str,
        range: DateRange,
    ) -> Result<Vec<ServerAnalytics>, AppError> {
        if range.start > range.end {
            return Err(AppError::bad_request("start must not be after end"));
        }

        Ok(ServerAnalyticsRepository::new(self.db)
            .get_range(server_id, range)
            .await?)
    }

    /// Stores one day's counters, replacing any earlier values for that day.
    pub async fn record_daily(&self, param: UpsertAnalyticsParam) -> Result<ServerAnalytics, AppError> {
        let counters = [
            ("memberCount", param.member_count),
            ("messageCount", param.message_count),
            ("commandsUsed", param.commands_used),
            ("ticketsCreated", param.tickets_created),
            ("modActionsCount", param.mod_actions_count),
            ("activeMembers", param.active_members),
        ];
        for (field, value) in counters {
            validate::non_negative(field, value)?;
        }

        Ok(ServerAnalyticsRepository::new(self.db)
            .upsert_daily(param)
            .await?)
    }
}
