//! Daily server analytics data repository.

use crate::server::model::analytics::{DateRange, ServerAnalytics, UpsertAnalyticsParam};
use entity::server_analytics::Column;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct ServerAnalyticsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerAnalyticsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a server's daily rows within `range` (inclusive), oldest day first.
    pub async fn get_range(
        &self,
        server_id: &str,
        range: DateRange,
    ) -> Result<Vec<ServerAnalytics>, DbErr> {
        let entities = entity::prelude::ServerAnalytics::find()
            .filter(Column::ServerId.eq(server_id))
            .filter(Column::Date.between(range.start, range.end))
            .order_by_asc(Column::Date)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ServerAnalytics::from_entity).collect())
    }

    /// Records the counters for one day, replacing any earlier row for that day.
    ///
    /// # Arguments
    /// - `param` - Server, day and the full set of counters
    ///
    /// # Returns
    /// - `Ok(ServerAnalytics)` - The stored row
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert_daily(&self, param: UpsertAnalyticsParam) -> Result<ServerAnalytics, DbErr> {
        let entity =
            entity::prelude::ServerAnalytics::insert(entity::server_analytics::ActiveModel {
                server_id: ActiveValue::Set(param.server_id),
                date: ActiveValue::Set(param.date),
                member_count: ActiveValue::Set(param.member_count),
                message_count: ActiveValue::Set(param.message_count),
                commands_used: ActiveValue::Set(param.commands_used),
                tickets_created: ActiveValue::Set(param.tickets_created),
                mod_actions_count: ActiveValue::Set(param.mod_actions_count),
                active_members: ActiveValue::Set(param.active_members),
            })
            .on_conflict(
                OnConflict::columns([Column::ServerId, Column::Date])
                    .update_columns([
                        Column::MemberCount,
                        Column::MessageCount,
                        Column::CommandsUsed,
                        Column::TicketsCreated,
                        Column::ModActionsCount,
                        Column::ActiveMembers,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        Ok(ServerAnalytics::from_entity(entity))
    }
}
