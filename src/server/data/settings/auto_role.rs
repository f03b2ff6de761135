use chrono::Utc;
use entity::auto_role_settings::Column;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{
    model::settings::{AutoRoleSettings, UpdateAutoRoleSettingsParam},
    util::parse::string_list_to_json,
};

pub struct AutoRoleSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AutoRoleSettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, server_id: &str) -> Result<Option<AutoRoleSettings>, DbErr> {
        entity::prelude::AutoRoleSettings::find_by_id(server_id.to_string())
            .one(self.db)
            .await?
            .map(AutoRoleSettings::from_entity)
            .transpose()
    }

    /// Creates or merges auto-role settings in one statement.
    pub async fn upsert(
        &self,
        server_id: &str,
        param: UpdateAutoRoleSettingsParam,
    ) -> Result<AutoRoleSettings, DbErr> {
        let defaults = AutoRoleSettings::defaults(server_id);
        let now = Utc::now();

        let mut update_columns = vec![Column::UpdatedAt];
        let supplied = [
            (param.enabled.is_some(), Column::Enabled),
            (param.join_roles.is_some(), Column::JoinRoles),
            (param.verified_role_id.is_some(), Column::VerifiedRoleId),
            (param.verification_enabled.is_some(), Column::VerificationEnabled),
            (param.reaction_roles_enabled.is_some(), Column::ReactionRolesEnabled),
        ];
        update_columns.extend(
            supplied
                .into_iter()
                .filter(|(is_set, _)| *is_set)
                .map(|(_, column)| column),
        );

        let entity =
            entity::prelude::AutoRoleSettings::insert(entity::auto_role_settings::ActiveModel {
                server_id: ActiveValue::Set(server_id.to_string()),
                enabled: ActiveValue::Set(param.enabled.unwrap_or(defaults.enabled)),
                join_roles: ActiveValue::Set(string_list_to_json(
                    &param.join_roles.unwrap_or(defaults.join_roles),
                )),
                verified_role_id: ActiveValue::Set(
                    param.verified_role_id.unwrap_or(defaults.verified_role_id),
                ),
                verification_enabled: ActiveValue::Set(
                    param
                        .verification_enabled
                        .unwrap_or(defaults.verification_enabled),
                ),
                reaction_roles_enabled: ActiveValue::Set(
                    param
                        .reaction_roles_enabled
                        .unwrap_or(defaults.reaction_roles_enabled),
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

        AutoRoleSettings::from_entity(entity)
    }
}
