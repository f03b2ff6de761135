//! Custom command data repository.

use crate::server::{
    model::custom_command::{CreateCustomCommandParam, CustomCommand, UpdateCustomCommandParam},
    util::parse::string_list_to_json,
};
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct CustomCommandRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomCommandRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a command with a zero usage count.
    ///
    /// # Returns
    /// - `Ok(CustomCommand)` - The created command
    /// - `Err(DbErr)` - Database error, including a unique violation on (server, name)
    pub async fn create(&self, param: CreateCustomCommandParam) -> Result<CustomCommand, DbErr> {
        let now = Utc::now();

        let entity = entity::custom_command::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            server_id: ActiveValue::Set(param.server_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            response: ActiveValue::Set(param.response),
            embed_enabled: ActiveValue::Set(param.embed_enabled),
            embed_color: ActiveValue::Set(param.embed_color),
            allowed_roles: ActiveValue::Set(string_list_to_json(&param.allowed_roles)),
            cooldown: ActiveValue::Set(param.cooldown),
            enabled: ActiveValue::Set(param.enabled),
            usage_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        CustomCommand::from_entity(entity)
    }

    pub async fn find_by_id(&self, command_id: &str) -> Result<Option<CustomCommand>, DbErr> {
        entity::prelude::CustomCommand::find_by_id(command_id.to_string())
            .one(self.db)
            .await?
            .map(CustomCommand::from_entity)
            .transpose()
    }

    /// Finds a server's command by its (lowercase) name.
    pub async fn find_by_name(
        &self,
        server_id: &str,
        name: &str,
    ) -> Result<Option<CustomCommand>, DbErr> {
        entity::prelude::CustomCommand::find()
            .filter(entity::custom_command::Column::ServerId.eq(server_id))
            .filter(entity::custom_command::Column::Name.eq(name))
            .one(self.db)
            .await?
            .map(CustomCommand::from_entity)
            .transpose()
    }

    /// Gets all commands for a server, newest first.
    pub async fn get_by_server(&self, server_id: &str) -> Result<Vec<CustomCommand>, DbErr> {
        entity::prelude::CustomCommand::find()
            .filter(entity::custom_command::Column::ServerId.eq(server_id))
            .order_by_desc(entity::custom_command::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(CustomCommand::from_entity)
            .collect()
    }

    /// Updates the supplied fields of a command and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(CustomCommand))` - The command after the update
    /// - `Ok(None)` - No command with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        command_id: &str,
        param: UpdateCustomCommandParam,
    ) -> Result<Option<CustomCommand>, DbErr> {
        fn set_if<T: Into<sea_orm::Value>>(value: Option<T>) -> ActiveValue<T> {
            match value {
                Some(value) => ActiveValue::Set(value),
                None => ActiveValue::NotSet,
            }
        }

        let active_model = entity::custom_command::ActiveModel {
            id: ActiveValue::Unchanged(command_id.to_string()),
            name: set_if(param.name),
            description: set_if(param.description),
            response: set_if(param.response),
            embed_enabled: set_if(param.embed_enabled),
            embed_color: set_if(param.embed_color),
            allowed_roles: set_if(param.allowed_roles.as_deref().map(string_list_to_json)),
            cooldown: set_if(param.cooldown),
            enabled: set_if(param.enabled),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        match active_model.update(self.db).await {
            Ok(entity) => CustomCommand::from_entity(entity).map(Some),
            Err(DbErr::RecordNotFound(_)) | Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Deletes a command.
    ///
    /// # Returns
    /// - `Ok(true)` - The command existed and was removed
    /// - `Ok(false)` - No command with that ID
    pub async fn delete(&self, command_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::CustomCommand::delete_by_id(command_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Increments the usage counter in place and returns the updated command.
    ///
    /// The increment is a single `usage_count = usage_count + 1` statement so
    /// concurrent invocations never lose counts.
    pub async fn increment_usage(&self, command_id: &str) -> Result<Option<CustomCommand>, DbErr> {
        let entities = entity::prelude::CustomCommand::update_many()
            .col_expr(
                entity::custom_command::Column::UsageCount,
                Expr::cust("usage_count + 1"),
            )
            .filter(entity::custom_command::Column::Id.eq(command_id))
            .exec_with_returning(self.db)
            .await?;

        entities
            .into_iter()
            .next()
            .map(CustomCommand::from_entity)
            .transpose()
    }
}
