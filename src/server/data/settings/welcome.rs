use chrono::Utc;
use entity::welcome_settings::Column;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::settings::{UpdateWelcomeSettingsParam, WelcomeSettings};

pub struct WelcomeSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WelcomeSettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, server_id: &str) -> Result<Option<WelcomeSettings>, DbErr> {
        let entity = entity::prelude::WelcomeSettings::find_by_id(server_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(WelcomeSettings::from_entity))
    }

    /// Creates or merges welcome/goodbye settings in one statement.
    pub async fn upsert(
        &self,
        server_id: &str,
        param: UpdateWelcomeSettingsParam,
    ) -> Result<WelcomeSettings, DbErr> {
        let defaults = WelcomeSettings::defaults(server_id);
        let now = Utc::now();

        let mut update_columns = vec![Column::UpdatedAt];
        let supplied = [
            (param.welcome_enabled.is_some(), Column::WelcomeEnabled),
            (param.welcome_channel_id.is_some(), Column::WelcomeChannelId),
            (param.welcome_message.is_some(), Column::WelcomeMessage),
            (param.welcome_embed_enabled.is_some(), Column::WelcomeEmbedEnabled),
            (param.welcome_embed_color.is_some(), Column::WelcomeEmbedColor),
            (param.goodbye_enabled.is_some(), Column::GoodbyeEnabled),
            (param.goodbye_channel_id.is_some(), Column::GoodbyeChannelId),
            (param.goodbye_message.is_some(), Column::GoodbyeMessage),
            (param.dm_welcome_enabled.is_some(), Column::DmWelcomeEnabled),
            (param.dm_welcome_message.is_some(), Column::DmWelcomeMessage),
        ];
        update_columns.extend(
            supplied
                .into_iter()
                .filter(|(is_set, _)| *is_set)
                .map(|(_, column)| column),
        );

        let entity =
            entity::prelude::WelcomeSettings::insert(entity::welcome_settings::ActiveModel {
                server_id: ActiveValue::Set(server_id.to_string()),
                welcome_enabled: ActiveValue::Set(
                    param.welcome_enabled.unwrap_or(defaults.welcome_enabled),
                ),
                welcome_channel_id: ActiveValue::Set(
                    param.welcome_channel_id.unwrap_or(defaults.welcome_channel_id),
                ),
                welcome_message: ActiveValue::Set(
                    param.welcome_message.unwrap_or(defaults.welcome_message),
                ),
                welcome_embed_enabled: ActiveValue::Set(
                    param
                        .welcome_embed_enabled
                        .unwrap_or(defaults.welcome_embed_enabled),
                ),
                welcome_embed_color: ActiveValue::Set(
                    param
                        .welcome_embed_color
                        .unwrap_or(defaults.welcome_embed_color),
                ),
                goodbye_enabled: ActiveValue::Set(
                    param.goodbye_enabled.unwrap_or(defaults.goodbye_enabled),
                ),
                goodbye_channel_id: ActiveValue::Set(
                    param.goodbye_channel_id.unwrap_or(defaults.goodbye_channel_id),
                ),
                goodbye_message: ActiveValue::Set(
                    param.goodbye_message.unwrap_or(defaults.goodbye_message),
                ),
                dm_welcome_enabled: ActiveValue::Set(
                    param.dm_welcome_enabled.unwrap_or(defaults.dm_welcome_enabled),
                ),
                dm_welcome_message: ActiveValue::Set(
                    param.dm_welcome_message.unwrap_or(defaults.dm_welcome_message),
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

        Ok(WelcomeSettings::from_entity(entity))
    }
}
