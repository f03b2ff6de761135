//! Support ticket data repository.

use crate::server::model::ticket::{CreateTicketParam, Ticket, TicketStatus};
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct TicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a new ticket.
    ///
    /// # Arguments
    /// - `param` - Server, channel, creator and optional subject
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The created ticket with status `open`
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateTicketParam) -> Result<Ticket, DbErr> {
        let entity = entity::ticket::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            server_id: ActiveValue::Set(param.server_id),
            channel_id: ActiveValue::Set(param.channel_id),
            creator_id: ActiveValue::Set(param.creator_id),
            creator_name: ActiveValue::Set(param.creator_name),
            status: ActiveValue::Set(TicketStatus::Open.as_str().to_string()),
            subject: ActiveValue::Set(param.subject),
            created_at: ActiveValue::Set(Utc::now()),
            closed_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Ok(Ticket::from_entity(entity))
    }

    pub async fn find_by_id(&self, ticket_id: &str) -> Result<Option<Ticket>, DbErr> {
        let entity = entity::prelude::Ticket::find_by_id(ticket_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Ticket::from_entity))
    }

    /// Gets all tickets for a server, newest first.
    pub async fn get_by_server(&self, server_id: &str) -> Result<Vec<Ticket>, DbErr> {
        let entities = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::ServerId.eq(server_id))
            .order_by_desc(entity::ticket::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ticket::from_entity).collect())
    }

    /// Marks a ticket closed and stamps the close time.
    ///
    /// Closing an already closed ticket keeps the status and refreshes `closed_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Ticket))` - The ticket after the update
    /// - `Ok(None)` - No ticket with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn close(&self, ticket_id: &str) -> Result<Option<Ticket>, DbErr> {
        let entities = entity::prelude::Ticket::update_many()
            .col_expr(
                entity::ticket::Column::Status,
                Expr::value(TicketStatus::Closed.as_str()),
            )
            .col_expr(entity::ticket::Column::ClosedAt, Expr::value(Utc::now()))
            .filter(entity::ticket::Column::Id.eq(ticket_id))
            .exec_with_returning(self.db)
            .await?;

        Ok(entities.into_iter().next().map(Ticket::from_entity))
    }

    /// Counts open tickets across the given servers.
    pub async fn count_open_for_servers(&self, server_ids: &[String]) -> Result<u64, DbErr> {
        if server_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::ServerId.is_in(server_ids.iter().cloned()))
            .filter(entity::ticket::Column::Status.eq(TicketStatus::Open.as_str()))
            .count(self.db)
            .await
    }

    /// Gets the most recent tickets across the given servers, newest first.
    pub async fn latest_for_servers(
        &self,
        server_ids: &[String],
        limit: u64,
    ) -> Result<Vec<Ticket>, DbErr> {
        if server_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::ServerId.is_in(server_ids.iter().cloned()))
            .order_by_desc(entity::ticket::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ticket::from_entity).collect())
    }
}
