use sea_orm::DatabaseConnection;

use crate::server::{
    data::reaction_role::ReactionRoleRepository,
    error::AppError,
    model::reaction_role::{CreateReactionRoleParam, ReactionRole},
    util::validate,
};

pub struct ReactionRoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReactionRoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateReactionRoleParam) -> Result<ReactionRole, AppError> {
        validate::require_non_empty("messageId", &param.message_id)?;
        validate::require_non_empty("channelId", &param.channel_id)?;
        validate::require_non_empty("roleId", &param.role_id)?;
        validate::require_non_empty("emoji", &param.emoji)?;
        validate::max_length("emoji", &param.emoji, 64)?;

        Ok(ReactionRoleRepository::new(self.db).create(param).await?)
    }

    pub async fn get_by_id(&self, reaction_role_id: &str) -> Result<Option<ReactionRole>, AppError> {
        Ok(ReactionRoleRepository::new(self.db)
            .find_by_id(reaction_role_id)
            .await?)
    }

    pub async fn get_by_server(&self, server_id: &str) -> Result<Vec<ReactionRole>, AppError> {
        Ok(ReactionRoleRepository::new(self.db)
            .get_by_server(server_id)
            .await?)
    }

    pub async fn delete(&self, reaction_role_id: &str) -> Result<bool, AppError> {
        Ok(ReactionRoleRepository::new(self.db)
            .delete(reaction_role_id)
            .await?)
    }
}
