//! Daily server analytics domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::analytics::{ServerAnalyticsDto, UpsertAnalyticsDto},
    server::util::parse::today,
};

/// Number of days covered when the client gives no range.
pub const DEFAULT_RANGE_DAYS: i64 = 30;

/// Counters for one server on one UTC day.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerAnalytics {
    pub server_id: String,
    pub date: NaiveDate,
    pub member_count: i32,
    pub message_count: i32,
    pub commands_used: i32,
    pub tickets_created: i32,
    pub mod_actions_count: i32,
    pub active_members: i32,
}

impl ServerAnalytics {
    pub fn from_entity(entity: entity::server_analytics::Model) -> Self {
        Self {
            server_id: entity.server_id,
            date: entity.date,
            member_count: entity.member_count,
            message_count: entity.message_count,
            commands_used: entity.commands_used,
            tickets_created: entity.tickets_created,
            mod_actions_count: entity.mod_actions_count,
            active_members: entity.active_members,
        }
    }

    pub fn into_dto(self) -> ServerAnalyticsDto {
        ServerAnalyticsDto {
            server_id: self.server_id,
            date: self.date,
            member_count: self.member_count,
            message_count: self.message_count,
            commands_used: self.commands_used,
            tickets_created: self.tickets_created,
            mod_actions_count: self.mod_actions_count,
            active_members: self.active_members,
        }
    }
}

/// Counters to record for one day, replacing any earlier submission.
#[derive(Debug, Clone)]
pub struct UpsertAnalyticsParam {
    pub server_id: String,
    pub date: NaiveDate,
    pub member_count: i32,
    pub message_count: i32,
    pub commands_used: i32,
    pub tickets_created: i32,
    pub mod_actions_count: i32,
    pub active_members: i32,
}

impl UpsertAnalyticsParam {
    pub fn from_dto(server_id: String, dto: UpsertAnalyticsDto) -> Self {
        Self {
            server_id,
            date: dto.date.unwrap_or_else(today),
            member_count: dto.member_count,
            message_count: dto.message_count,
            commands_used: dto.commands_used,
            tickets_created: dto.tickets_created,
            mod_actions_count: dto.mod_actions_count,
            active_members: dto.active_members,
        }
    }
}

/// Inclusive date range for analytics queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Resolves optional bounds; a missing range covers the last 30 days up to today.
    pub fn resolve(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let end = end.unwrap_or_else(today);
        let start = start.unwrap_or(end - chrono::Duration::days(DEFAULT_RANGE_DAYS - 1));
        Self { start, end }
    }
}
