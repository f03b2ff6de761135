use sea_orm::DatabaseConnection;

use crate::server::{
    data::mod_action::ModActionRepository,
    error::AppError,
    model::mod_action::{CreateModActionParam, ModAction},
    util::validate,
};

pub struct ModActionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModActionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateModActionParam) -> Result<ModAction, AppError> {
        validate::require_non_empty("targetId", &param.target_id)?;
        validate::require_non_empty("targetName", &param.target_name)?;
        validate::require_non_empty("moderatorId", &param.moderator_id)?;
        validate::require_non_empty("moderatorName", &param.moderator_name)?;
        if let Some(reason) = &param.reason {
            validate::max_length("reason", reason, 512)?;
        }

        Ok(ModActionRepository::new(self.db).create(param).await?)
    }

    pub async fn get_by_server(&self, server_id: &str) -> Result<Vec<ModAction>, AppError> {
        Ok(ModActionRepository::new(self.db)
            .get_by_server(server_id)
            .await?)
    }
}
