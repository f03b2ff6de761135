use sea_orm::DatabaseConnection;

use crate::server::{
    data::ticket::TicketRepository,
    error::AppError,
    model::ticket::{CreateTicketParam, Ticket},
    util::validate,
};

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a ticket after checking the required Discord fields
    pub async fn create(&self, param: CreateTicketParam) -> Result<Ticket, AppError> {
        validate::require_non_empty("channelId", &param.channel_id)?;
        validate::require_non_empty("creatorId", &param.creator_id)?;
        validate::require_non_empty("creatorName", &param.creator_name)?;
        if let Some(subject) = &param.subject {
            validate::max_length("subject", subject, 100)?;
        }

        Ok(TicketRepository::new(self.db).create(param).await?)
    }

    pub async fn get_by_id(&self, ticket_id: &str) -> Result<Option<Ticket>, AppError> {
        Ok(TicketRepository::new(self.db).find_by_id(ticket_id).await?)
    }

    pub async fn get_by_server(&self, server_id: &str) -> Result<Vec<Ticket>, AppError> {
        Ok(TicketRepository::new(self.db).get_by_server(server_id).await?)
    }

    /// Closes a ticket; returns None if it does not exist
    pub async fn close(&self, ticket_id: &str) -> Result<Option<Ticket>, AppError> {
        Ok(TicketRepository::new(self.db).close(ticket_id).await?)
    }
}
