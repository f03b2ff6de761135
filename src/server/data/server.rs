//! Discord server data repository.

use crate::server::model::server::{Server, UpsertServerParam};
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a server or refreshes its metadata when the caller already owns it.
    ///
    /// On conflict the name, icon, member count and `updated_at` are replaced only if the
    /// stored owner matches `param.owner_id`. The owner itself is never changed, and the
    /// check happens inside the same statement as the write.
    ///
    /// # Arguments
    /// - `param` - Server metadata and the owner to record on insert
    ///
    /// # Returns
    /// - `Ok(Some(Server))` - The created or updated server
    /// - `Ok(None)` - The server exists and belongs to another owner; nothing was written
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, param: UpsertServerParam) -> Result<Option<Server>, DbErr> {
        let now = Utc::now();

        let result = entity::prelude::Server::insert(entity::server::ActiveModel {
            id: ActiveValue::Set(param.id),
            name: ActiveValue::Set(param.name),
            icon_url: ActiveValue::Set(param.icon_url),
            owner_id: ActiveValue::Set(param.owner_id.clone()),
            member_count: ActiveValue::Set(param.member_count),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::server::Column::Id)
                .update_columns([
                    entity::server::Column::Name,
                    entity::server::Column::IconUrl,
                    entity::server::Column::MemberCount,
                    entity::server::Column::UpdatedAt,
                ])
                .action_and_where(entity::server::Column::OwnerId.eq(param.owner_id))
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await;

        match result {
            Ok(entity) => Ok(Some(Server::from_entity(entity))),
            // The conflict predicate filtered the row out, so RETURNING came back empty.
            Err(DbErr::RecordNotInserted) | Err(DbErr::RecordNotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Finds a server by its Discord guild ID.
    ///
    /// # Returns
    /// - `Ok(Some(Server))` - Server found
    /// - `Ok(None)` - Server is not registered
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, server_id: &str) -> Result<Option<Server>, DbErr> {
        let entity = entity::prelude::Server::find_by_id(server_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Server::from_entity))
    }

    /// Gets all servers owned by a user, ordered by name.
    pub async fn get_by_owner(&self, owner_id: &str) -> Result<Vec<Server>, DbErr> {
        let entities = entity::prelude::Server::find()
            .filter(entity::server::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::server::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Server::from_entity).collect())
    }
}
