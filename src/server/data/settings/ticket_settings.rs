use chrono::Utc;
use entity::ticket_settings::Column;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{
    model::settings::{TicketSettings, UpdateTicketSettingsParam},
    util::parse::string_list_to_json,
};

pub struct TicketSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketSettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, server_id: &str) -> Result<Option<TicketSettings>, DbErr> {
        entity::prelude::TicketSettings::find_by_id(server_id.to_string())
            .one(self.db)
            .await?
            .map(TicketSettings::from_entity)
            .transpose()
    }

    /// Creates or merges ticket settings in one statement.
    pub async fn upsert(
        &self,
        server_id: &str,
        param: UpdateTicketSettingsParam,
    ) -> Result<TicketSettings, DbErr> {
        let defaults = TicketSettings::defaults(server_id);
        let now = Utc::now();

        let mut update_columns = vec![Column::UpdatedAt];
        if param.enabled.is_some() {
            update_columns.push(Column::Enabled);
        }
        if param.category_id.is_some() {
            update_columns.push(Column::CategoryId);
        }
        if param.support_roles.is_some() {
            update_columns.push(Column::SupportRoles);
        }
        if param.welcome_message.is_some() {
            update_columns.push(Column::WelcomeMessage);
        }

        let entity =
            entity::prelude::TicketSettings::insert(entity::ticket_settings::ActiveModel {
                server_id: ActiveValue::Set(server_id.to_string()),
                enabled: ActiveValue::Set(param.enabled.unwrap_or(defaults.enabled)),
                category_id: ActiveValue::Set(param.category_id.unwrap_or(defaults.category_id)),
                support_roles: ActiveValue::Set(string_list_to_json(
                    &param.support_roles.unwrap_or(defaults.support_roles),
                )),
                welcome_message: ActiveValue::Set(
                    param.welcome_message.unwrap_or(defaults.welcome_message),
                ),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .on_conflict(
                OnConflict::column(Column::ServerId)
                    .update_columns(update_columns)
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        TicketSettings::from_entity(entity)
    }
}
