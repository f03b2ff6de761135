//! Reaction role binding data repository.

use crate::server::model::reaction_role::{CreateReactionRoleParam, ReactionRole};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct ReactionRoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReactionRoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateReactionRoleParam) -> Result<ReactionRole, DbErr> {
        let entity = entity::reaction_role::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            server_id: ActiveValue::Set(param.server_id),
            message_id: ActiveValue::Set(param.message_id),
            channel_id: ActiveValue::Set(param.channel_id),
            emoji: ActiveValue::Set(param.emoji),
            role_id: ActiveValue::Set(param.role_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(ReactionRole::from_entity(entity))
    }

    pub async fn find_by_id(&self, reaction_role_id: &str) -> Result<Option<ReactionRole>, DbErr> {
        let entity = entity::prelude::ReactionRole::find_by_id(reaction_role_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(ReactionRole::from_entity))
    }

    /// Gets all bindings for a server, newest first.
    pub async fn get_by_server(&self, server_id: &str) -> Result<Vec<ReactionRole>, DbErr> {
        let entities = entity::prelude::ReactionRole::find()
            .filter(entity::reaction_role::Column::ServerId.eq(server_id))
            .order_by_desc(entity::reaction_role::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ReactionRole::from_entity).collect())
    }

    /// Deletes a binding, returning whether it existed.
    pub async fn delete(&self, reaction_role_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::ReactionRole::delete_by_id(reaction_role_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
