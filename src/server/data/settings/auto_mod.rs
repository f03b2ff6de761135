use chrono::Utc;
use entity::auto_mod_settings::Column;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{
    model::settings::{AutoModSettings, UpdateAutoModSettingsParam},
    util::parse::string_list_to_json,
};

pub struct AutoModSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AutoModSettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, server_id: &str) -> Result<Option<AutoModSettings>, DbErr> {
        entity::prelude::AutoModSettings::find_by_id(server_id.to_string())
            .one(self.db)
            .await?
            .map(AutoModSettings::from_entity)
            .transpose()
    }

    /// Creates or merges auto-moderation settings in one statement.
    pub async fn upsert(
        &self,
        server_id: &str,
        param: UpdateAutoModSettingsParam,
    ) -> Result<AutoModSettings, DbErr> {
        let defaults = AutoModSettings::defaults(server_id);
        let now = Utc::now();

        let mut update_columns = vec![Column::UpdatedAt];
        let supplied = [
            (param.spam_enabled.is_some(), Column::SpamEnabled),
            (param.spam_threshold.is_some(), Column::SpamThreshold),
            (param.spam_interval.is_some(), Column::SpamInterval),
            (param.spam_action.is_some(), Column::SpamAction),
            (param.word_filter_enabled.is_some(), Column::WordFilterEnabled),
            (param.filtered_words.is_some(), Column::FilteredWords),
            (param.word_filter_action.is_some(), Column::WordFilterAction),
            (param.raid_protection_enabled.is_some(), Column::RaidProtectionEnabled),
            (param.raid_join_threshold.is_some(), Column::RaidJoinThreshold),
            (param.raid_join_interval.is_some(), Column::RaidJoinInterval),
            (param.raid_action.is_some(), Column::RaidAction),
            (param.exempt_roles.is_some(), Column::ExemptRoles),
        ];
        update_columns.extend(
            supplied
                .into_iter()
                .filter(|(is_set, _)| *is_set)
                .map(|(_, column)| column),
        );

        let entity =
            entity::prelude::AutoModSettings::insert(entity::auto_mod_settings::ActiveModel {
                server_id: ActiveValue::Set(server_id.to_string()),
                spam_enabled: ActiveValue::Set(param.spam_enabled.unwrap_or(defaults.spam_enabled)),
                spam_threshold: ActiveValue::Set(
                    param.spam_threshold.unwrap_or(defaults.spam_threshold),
                ),
                spam_interval: ActiveValue::Set(
                    param.spam_interval.unwrap_or(defaults.spam_interval),
                ),
                spam_action: ActiveValue::Set(
                    param
                        .spam_action
                        .map(|action| action.as_str().to_string())
                        .unwrap_or(defaults.spam_action),
                ),
                word_filter_enabled: ActiveValue::Set(
                    param
                        .word_filter_enabled
                        .unwrap_or(defaults.word_filter_enabled),
                ),
                filtered_words: ActiveValue::Set(string_list_to_json(
                    &param.filtered_words.unwrap_or(defaults.filtered_words),
                )),
                word_filter_action: ActiveValue::Set(
                    param
                        .word_filter_action
                        .map(|action| action.as_str().to_string())
                        .unwrap_or(defaults.word_filter_action),
                ),
                raid_protection_enabled: ActiveValue::Set(
                    param
                        .raid_protection_enabled
                        .unwrap_or(defaults.raid_protection_enabled),
                ),
                raid_join_threshold: ActiveValue::Set(
                    param
                        .raid_join_threshold
                        .unwrap_or(defaults.raid_join_threshold),
                ),
                raid_join_interval: ActiveValue::Set(
                    param.raid_join_interval.unwrap_or(defaults.raid_join_interval),
                ),
                raid_action: ActiveValue::Set(
                    param
                        .raid_action
                        .map(|action| action.as_str().to_string())
                        .unwrap_or(defaults.raid_action),
                ),
                exempt_roles: ActiveValue::Set(string_list_to_json(
                    &param.exempt_roles.unwrap_or(defaults.exempt_roles),
                )),
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

        AutoModSettings::from_entity(entity)
    }
}
