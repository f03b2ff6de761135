use chrono::Utc;
use entity::mod_settings::Column;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{
    model::settings::{ModSettings, UpdateModSettingsParam},
    util::parse::string_list_to_json,
};

pub struct ModSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModSettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the stored moderation settings for a server.
    ///
    /// # Returns
    /// - `Ok(Some(ModSettings))` - Settings have been saved before
    /// - `Ok(None)` - Nothing stored yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(&self, server_id: &str) -> Result<Option<ModSettings>, DbErr> {
        entity::prelude::ModSettings::find_by_id(server_id.to_string())
            .one(self.db)
            .await?
            .map(ModSettings::from_entity)
            .transpose()
    }

    /// Creates or merges moderation settings in one statement.
    ///
    /// # Arguments
    /// - `server_id` - Discord guild ID the settings belong to
    /// - `param` - Fields to write; `None` leaves the stored value (or default) in place
    ///
    /// # Returns
    /// - `Ok(ModSettings)` - The settings row after the write
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        server_id: &str,
        param: UpdateModSettingsParam,
    ) -> Result<ModSettings, DbErr> {
        let defaults = ModSettings::defaults(server_id);
        let now = Utc::now();

        let mut update_columns = vec![Column::UpdatedAt];
        if param.ban_enabled.is_some() {
            update_columns.push(Column::BanEnabled);
        }
        if param.kick_enabled.is_some() {
            update_columns.push(Column::KickEnabled);
        }
        if param.mute_enabled.is_some() {
            update_columns.push(Column::MuteEnabled);
        }
        if param.warn_enabled.is_some() {
            update_columns.push(Column::WarnEnabled);
        }
        if param.mod_roles.is_some() {
            update_columns.push(Column::ModRoles);
        }
        if param.log_channel_id.is_some() {
            update_columns.push(Column::LogChannelId);
        }

        let entity = entity::prelude::ModSettings::insert(entity::mod_settings::ActiveModel {
            server_id: ActiveValue::Set(server_id.to_string()),
            ban_enabled: ActiveValue::Set(param.ban_enabled.unwrap_or(defaults.ban_enabled)),
            kick_enabled: ActiveValue::Set(param.kick_enabled.unwrap_or(defaults.kick_enabled)),
            mute_enabled: ActiveValue::Set(param.mute_enabled.unwrap_or(defaults.mute_enabled)),
            warn_enabled: ActiveValue::Set(param.warn_enabled.unwrap_or(defaults.warn_enabled)),
            mod_roles: ActiveValue::Set(string_list_to_json(
                &param.mod_roles.unwrap_or(defaults.mod_roles),
            )),
            log_channel_id: ActiveValue::Set(
                param.log_channel_id.unwrap_or(defaults.log_channel_id),
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

        ModSettings::from_entity(entity)
    }
}
