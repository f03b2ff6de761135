use sea_orm::DatabaseConnection;

use crate::server::{
    data::server::ServerRepository,
    error::{auth::AuthError, AppError},
    model::server::{Server, UpsertServerParam},
    util::validate,
};

pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the servers owned by a user, ordered by name
    pub async fn get_owned(&self, owner_id: &str) -> Result<Vec<Server>, AppError> {
        Ok(ServerRepository::new(self.db).get_by_owner(owner_id).await?)
    }

    pub async fn get_by_id(&self, server_id: &str) -> Result<Option<Server>, AppError> {
        Ok(ServerRepository::new(self.db).find_by_id(server_id).await?)
    }

    /// Registers a server for the caller or refreshes its metadata.
    ///
    /// # Returns
    /// - `Ok(Server)` - The stored server
    /// - `Err(AppError::BadRequest)` - Missing id/name or negative member count
    /// - `Err(AppError::AuthErr(AuthError::Forbidden))` - Server already registered by another user
    pub async fn upsert(&self, param: UpsertServerParam) -> Result<Server, AppError> {
        validate::require_non_empty("id", &param.id)?;
        validate::require_non_empty("name", &param.name)?;
        validate::max_length("name", &param.name, 100)?;
        validate::non_negative("memberCount", param.member_count)?;

        ServerRepository::new(self.db)
            .upsert(param)
            .await?
            .ok_or_else(|| AuthError::Forbidden.into())
    }
}
