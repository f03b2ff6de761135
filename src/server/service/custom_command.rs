use sea_orm::DatabaseConnection;

use crate::server::{
    data::custom_command::CustomCommandRepository,
    error::AppError,
    model::custom_command::{CreateCustomCommandParam, CustomCommand, UpdateCustomCommandParam},
    service::auth::is_unique_violation,
    util::validate,
};

const MAX_RESPONSE_LENGTH: usize = 2000;
const MAX_DESCRIPTION_LENGTH: usize = 100;

pub struct CustomCommandService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomCommandService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a command after validating its fields and name uniqueness.
    ///
    /// # Returns
    /// - `Ok(CustomCommand)` - The created command
    /// - `Err(AppError::BadRequest)` - Invalid field or a command with that name already
    ///   exists in the server
    pub async fn create(&self, param: CreateCustomCommandParam) -> Result<CustomCommand, AppError> {
        validate::command_name(&param.name)?;
        validate::require_non_empty("response", &param.response)?;
        validate::max_length("response", &param.response, MAX_RESPONSE_LENGTH)?;
        validate::hex_color("embedColor", &param.embed_color)?;
        validate::non_negative("cooldown", param.cooldown)?;
        if let Some(description) = &param.description {
            validate::max_length("description", description, MAX_DESCRIPTION_LENGTH)?;
        }

        let repo = CustomCommandRepository::new(self.db);

        if repo.find_by_name(&param.server_id, &param.name).await?.is_some() {
            return Err(name_taken(&param.name));
        }

        let name = param.name.clone();
        match repo.create(param).await {
            Ok(command) => Ok(command),
            Err(err) if is_unique_violation(&err) => Err(name_taken(&name)),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn get_by_id(&self, command_id: &str) -> Result<Option<CustomCommand>, AppError> {
        Ok(CustomCommandRepository::new(self.db)
            .find_by_id(command_id)
            .await?)
    }

    pub async fn get_by_server(&self, server_id: &str) -> Result<Vec<CustomCommand>, AppError> {
        Ok(CustomCommandRepository::new(self.db)
            .get_by_server(server_id)
            .await?)
    }

    /// Applies a partial update to `command`.
    ///
    /// Renaming checks that no other command in the same server uses the new name.
    pub async fn update(
        &self,
        command: &CustomCommand,
        param: UpdateCustomCommandParam,
    ) -> Result<Option<CustomCommand>, AppError> {
        if let Some(response) = &param.response {
            validate::require_non_empty("response", response)?;
            validate::max_length("response", response, MAX_RESPONSE_LENGTH)?;
        }
        if let Some(color) = &param.embed_color {
            validate::hex_color("embedColor", color)?;
        }
        if let Some(cooldown) = param.cooldown {
            validate::non_negative("cooldown", cooldown)?;
        }
        if let Some(Some(description)) = &param.description {
            validate::max_length("description", description, MAX_DESCRIPTION_LENGTH)?;
        }

        let repo = CustomCommandRepository::new(self.db);

        if let Some(name) = &param.name {
            validate::command_name(name)?;
            if let Some(other) = repo.find_by_name(&command.server_id, name).await? {
                if other.id != command.id {
                    return Err(name_taken(name));
                }
            }
        }

        let name = param.name.clone();
        match repo.update(&command.id, param).await {
            Ok(updated) => Ok(updated),
            Err(err) if is_unique_violation(&err) => {
                Err(name_taken(name.as_deref().unwrap_or(&command.name)))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn delete(&self, command_id: &str) -> Result<bool, AppError> {
        Ok(CustomCommandRepository::new(self.db)
            .delete(command_id)
            .await?)
    }

    /// Records one invocation of a command.
    pub async fn record_use(&self, command_id: &str) -> Result<Option<CustomCommand>, AppError> {
        Ok(CustomCommandRepository::new(self.db)
            .increment_usage(command_id)
            .await?)
    }
}

fn name_taken(name: &str) -> AppError {
    AppError::bad_request(format!("A command named '{}' already exists", name))
}
