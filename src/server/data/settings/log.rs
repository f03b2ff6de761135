use chrono::Utc;
use entity::log_settings::Column;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::settings::{LogSettings, UpdateLogSettingsParam};

pub struct LogSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LogSettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, server_id: &str) -> Result<Option<LogSettings>, DbErr> {
        let entity = entity::prelude::LogSettings::find_by_id(server_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(LogSettings::from_entity))
    }

    /// Creates or merges logging settings in one statement.
    pub async fn upsert(
        &self,
        server_id: &str,
        param: UpdateLogSettingsParam,
    ) -> Result<LogSettings, DbErr> {
        let defaults = LogSettings::defaults(server_id);
        let now = Utc::now();

        let mut update_columns = vec![Column::UpdatedAt];
        let supplied = [
            (param.log_channel_id.is_some(), Column::LogChannelId),
            (param.log_mod_actions.is_some(), Column::LogModActions),
            (param.log_message_edits.is_some(), Column::LogMessageEdits),
            (param.log_message_deletes.is_some(), Column::LogMessageDeletes),
            (param.log_member_joins.is_some(), Column::LogMemberJoins),
            (param.log_member_leaves.is_some(), Column::LogMemberLeaves),
            (param.log_voice_activity.is_some(), Column::LogVoiceActivity),
            (param.log_role_changes.is_some(), Column::LogRoleChanges),
        ];
        update_columns.extend(
            supplied
                .into_iter()
                .filter(|(is_set, _)| *is_set)
                .map(|(_, column)| column),
        );

        let entity = entity::prelude::LogSettings::insert(entity::log_settings::ActiveModel {
            server_id: ActiveValue::Set(server_id.to_string()),
            log_channel_id: ActiveValue::Set(
                param.log_channel_id.unwrap_or(defaults.log_channel_id),
            ),
            log_mod_actions: ActiveValue::Set(
                param.log_mod_actions.unwrap_or(defaults.log_mod_actions),
            ),
            log_message_edits: ActiveValue::Set(
                param.log_message_edits.unwrap_or(defaults.log_message_edits),
            ),
            log_message_deletes: ActiveValue::Set(
                param
                    .log_message_deletes
                    .unwrap_or(defaults.log_message_deletes),
            ),
            log_member_joins: ActiveValue::Set(
                param.log_member_joins.unwrap_or(defaults.log_member_joins),
            ),
            log_member_leaves: ActiveValue::Set(
                param.log_member_leaves.unwrap_or(defaults.log_member_leaves),
            ),
            log_voice_activity: ActiveValue::Set(
                param.log_voice_activity.unwrap_or(defaults.log_voice_activity),
            ),
            log_role_changes: ActiveValue::Set(
                param.log_role_changes.unwrap_or(defaults.log_role_changes),
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

        Ok(LogSettings::from_entity(entity))
    }
}
