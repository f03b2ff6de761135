//! Per-server settings, read with defaults and written as partial upserts.
//!
//! Reads never create rows: a server with no stored settings gets the application
//! defaults back. The first write creates the row.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::settings::{
        AutoModSettingsRepository, AutoRoleSettingsRepository, LogSettingsRepository,
        ModSettingsRepository, TicketSettingsRepository, WelcomeSettingsRepository,
    },
    error::AppError,
    model::settings::{
        AutoModSettings, AutoRoleSettings, LogSettings, ModSettings, TicketSettings,
        UpdateAutoModSettingsParam, UpdateAutoRoleSettingsParam, UpdateLogSettingsParam,
        UpdateModSettingsParam, UpdateTicketSettingsParam, UpdateWelcomeSettingsParam,
        WelcomeSettings,
    },
    util::validate,
};

/// Discord's message length limit.
const MAX_MESSAGE_LENGTH: usize = 2000;

pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets moderation settings for a server, falling back to defaults when none are stored.
    ///
    /// # Arguments
    /// - `server_id` - Discord guild ID of the server
    ///
    /// # Returns
    /// - `Ok(ModSettings)` - Stored settings, or defaults with `updated_at` unset
    /// - `Err(AppError)` - Database error during query
    pub async fn get_mod(&self, server_id: &str) -> Result<ModSettings, AppError> {
        let stored = ModSettingsRepository::new(self.db).get(server_id).await?;
        Ok(stored.unwrap_or_else(|| ModSettings::defaults(server_id)))
    }

    /// Applies a partial update to moderation settings, creating the row on first write.
    ///
    /// # Arguments
    /// - `server_id` - Discord guild ID of the server
    /// - `param` - Fields to change; omitted fields keep their stored or default value
    ///
    /// # Returns
    /// - `Ok(ModSettings)` - Settings as stored after the write
    /// - `Err(AppError)` - Database error during upsert
    pub async fn update_mod(
        &self,
        server_id: &str,
        param: UpdateModSettingsParam,
    ) -> Result<ModSettings, AppError> {
        Ok(ModSettingsRepository::new(self.db)
            .upsert(server_id, param)
            .await?)
    }

    /// Gets ticket settings for a server, falling back to defaults when none are stored.
    ///
    /// # Arguments
    /// - `server_id` - Discord guild ID of the server
    ///
    /// # Returns
    /// - `Ok(TicketSettings)` - Stored settings, or defaults with `updated_at` unset
    /// - `Err(AppError)` - Database error during query
    pub async fn get_ticket(&self, server_id: &str) -> Result<TicketSettings, AppError> {
        let stored = TicketSettingsRepository::new(self.db).get(server_id).await?;
        Ok(stored.unwrap_or_else(|| TicketSettings::defaults(server_id)))
    }

    /// Applies a partial update to ticket settings, creating the row on first write.
    ///
    /// The ticket welcome message, when given, must be non-empty and fit in one Discord message.
    ///
    /// # Arguments
    /// - `server_id` - Discord guild ID of the server
    /// - `param` - Fields to change; omitted fields keep their stored or default value
    ///
    /// # Returns
    /// - `Ok(TicketSettings)` - Settings as stored after the write
    /// - `Err(AppError::BadRequest)` - Welcome message empty or too long
    /// - `Err(AppError)` - Database error during upsert
    pub async fn update_ticket(
        &self,
        server_id: &str,
        param: UpdateTicketSettingsParam,
    ) -> Result<TicketSettings, AppError> {
        if let Some(message) = &param.welcome_message {
            validate::require_non_empty("welcomeMessage", message)?;
            validate::max_length("welcomeMessage", message, MAX_MESSAGE_LENGTH)?;
        }

        Ok(TicketSettingsRepository::new(self.db)
            .upsert(server_id, param)
            .await?)
    }

    /// Gets auto-moderation settings, or defaults when none are stored.
    pub async fn get_auto_mod(&self, server_id: &str) -> Result<AutoModSettings, AppError> {
        let stored = AutoModSettingsRepository::new(self.db).get(server_id).await?;
        Ok(stored.unwrap_or_else(|| AutoModSettings::defaults(server_id)))
    }

    /// Writes auto-moderation settings.
    ///
    /// Thresholds and intervals must not be negative.
    ///
    /// # Returns
    /// - `Ok(AutoModSettings)` - Settings as stored after the write
    /// - `Err(AppError::BadRequest)` - A threshold or interval is negative
    /// - `Err(AppError)` - Database error during upsert
    pub async fn update_auto_mod(
        &self,
        server_id: &str,
        param: UpdateAutoModSettingsParam,
    ) -> Result<AutoModSettings, AppError> {
        let counters = [
            ("spamThreshold", param.spam_threshold),
            ("spamInterval", param.spam_interval),
            ("raidJoinThreshold", param.raid_join_threshold),
            ("raidJoinInterval", param.raid_join_interval),
        ];
        for (field, value) in counters {
            if let Some(value) = value {
                validate::non_negative(field, value)?;
            }
        }

        Ok(AutoModSettingsRepository::new(self.db)
            .upsert(server_id, param)
            .await?)
    }

    /// Gets logging settings for a server, falling back to defaults when none are stored.
    ///
    /// # Arguments
    /// - `server_id` - Discord guild ID of the server
    ///
    /// # Returns
    /// - `Ok(LogSettings)` - Stored settings, or defaults with `updated_at` unset
    /// - `Err(AppError)` - Database error during query
    pub async fn get_log(&self, server_id: &str) -> Result<LogSettings, AppError> {
        let stored = LogSettingsRepository::new(self.db).get(server_id).await?;
        Ok(stored.unwrap_or_else(|| LogSettings::defaults(server_id)))
    }

    /// Applies a partial update to logging settings, creating the row on first write.
    ///
    /// # Arguments
    /// - `server_id` - Discord guild ID of the server
    /// - `param` - Fields to change; omitted fields keep their stored or default value
    ///
    /// # Returns
    /// - `Ok(LogSettings)` - Settings as stored after the write
    /// - `Err(AppError)` - Database error during upsert
    pub async fn update_log(
        &self,
        server_id: &str,
        param: UpdateLogSettingsParam,
    ) -> Result<LogSettings, AppError> {
        Ok(LogSettingsRepository::new(self.db)
            .upsert(server_id, param)
            .await?)
    }

    /// Gets welcome/goodbye settings, or defaults when none are stored.
    pub async fn get_welcome(&self, server_id: &str) -> Result<WelcomeSettings, AppError> {
        let stored = WelcomeSettingsRepository::new(self.db).get(server_id).await?;
        Ok(stored.unwrap_or_else(|| WelcomeSettings::defaults(server_id)))
    }

    /// Writes welcome/goodbye settings after checking the embed color and message lengths.
    pub async fn update_welcome(
        &self,
        server_id: &str,
        param: UpdateWelcomeSettingsParam,
    ) -> Result<WelcomeSettings, AppError> {
        if let Some(color) = &param.welcome_embed_color {
            validate::hex_color("welcomeEmbedColor", color)?;
        }
        let messages = [
            ("welcomeMessage", &param.welcome_message),
            ("goodbyeMessage", &param.goodbye_message),
            ("dmWelcomeMessage", &param.dm_welcome_message),
        ];
        for (field, message) in messages {
            if let Some(message) = message {
                validate::max_length(field, message, MAX_MESSAGE_LENGTH)?;
            }
        }

        Ok(WelcomeSettingsRepository::new(self.db)
            .upsert(server_id, param)
            .await?)
    }

    /// Gets auto-role settings for a server, falling back to defaults when none are stored.
    ///
    /// # Arguments
    /// - `server_id` - Discord guild ID of the server
    ///
    /// # Returns
    /// - `Ok(AutoRoleSettings)` - Stored settings, or defaults with `updated_at` unset
    /// - `Err(AppError)` - Database error during query
    pub async fn get_auto_role(&self, server_id: &str) -> Result<AutoRoleSettings, AppError> {
        let stored = AutoRoleSettingsRepository::new(self.db).get(server_id).await?;
        Ok(stored.unwrap_or_else(|| AutoRoleSettings::defaults(server_id)))
    }

    /// Applies a partial update to auto-role settings, creating the row on first write.
    ///
    /// # Arguments
    /// - `server_id` - Discord guild ID of the server
    /// - `param` - Fields to change; omitted fields keep their stored or default value
    ///
    /// # Returns
    /// - `Ok(AutoRoleSettings)` - Settings as stored after the write
    /// - `Err(AppError)` - Database error during upsert
    pub async fn update_auto_role(
        &self,
        server_id: &str,
        param: UpdateAutoRoleSettingsParam,
    ) -> Result<AutoRoleSettings, AppError> {
        Ok(AutoRoleSettingsRepository::new(self.db)
            .upsert(server_id, param)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn get_returns_defaults_without_creating_row() {
        let test = TestBuilder::new()
            .with_server_tables()
            .with_table(entity::prelude::WelcomeSettings)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let server = factory::create_server(db).await.unwrap();

        let service = SettingsService::new(db);
        let settings = service.get_welcome(&server.id).await.unwrap();

        assert_eq!(settings, WelcomeSettings::defaults(&server.id));
        assert!(WelcomeSettingsRepository::new(db)
            .get(&server.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn update_welcome_rejects_bad_color() {
        let test = TestBuilder::new()
            .with_server_tables()
            .with_table(entity::prelude::WelcomeSettings)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let server = factory::create_server(db).await.unwrap();

        let result = SettingsService::new(db)
            .update_welcome(
                &server.id,
                UpdateWelcomeSettingsParam {
                    welcome_embed_color: Some("blue".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn update_auto_mod_rejects_negative_threshold() {
        let test = TestBuilder::new()
            .with_server_tables()
            .with_table(entity::prelude::AutoModSettings)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let server = factory::create_server(db).await.unwrap();

        let result = SettingsService::new(db)
            .update_auto_mod(
                &server.id,
                UpdateAutoModSettingsParam {
                    raid_join_threshold: Some(-1),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
