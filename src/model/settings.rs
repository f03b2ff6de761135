//! Per-server configuration bodies.
//!
//! Each settings resource has a full representation returned by GET/PATCH and a
//! patch body where every field is optional. Nullable columns use
//! [`double_option`] so that `null` clears the value while a missing field leaves
//! it untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::double_option;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModSettingsDto {
    pub server_id: String,
    pub ban_enabled: bool,
    pub kick_enabled: bool,
    pub mute_enabled: bool,
    pub warn_enabled: bool,
    pub mod_roles: Vec<String>,
    pub log_channel_id: Option<String>,
    /// `None` until the settings are first saved.
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateModSettingsDto {
    pub ban_enabled: Option<bool>,
    pub kick_enabled: Option<bool>,
    pub mute_enabled: Option<bool>,
    pub warn_enabled: Option<bool>,
    pub mod_roles: Option<Vec<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub log_channel_id: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketSettingsDto {
    pub server_id: String,
    pub enabled: bool,
    pub category_id: Option<String>,
    pub support_roles: Vec<String>,
    pub welcome_message: String,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateTicketSettingsDto {
    pub enabled: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub category_id: Option<Option<String>>,
    pub support_roles: Option<Vec<String>>,
    pub welcome_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AutoModSettingsDto {
    pub server_id: String,
    pub spam_enabled: bool,
    pub spam_threshold: i32,
    /// Seconds.
    pub spam_interval: i32,
    pub spam_action: String,
    pub word_filter_enabled: bool,
    pub filtered_words: Vec<String>,
    pub word_filter_action: String,
    pub raid_protection_enabled: bool,
    pub raid_join_threshold: i32,
    /// Seconds.
    pub raid_join_interval: i32,
    pub raid_action: String,
    pub exempt_roles: Vec<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateAutoModSettingsDto {
    pub spam_enabled: Option<bool>,
    pub spam_threshold: Option<i32>,
    pub spam_interval: Option<i32>,
    pub spam_action: Option<String>,
    pub word_filter_enabled: Option<bool>,
    pub filtered_words: Option<Vec<String>>,
    pub word_filter_action: Option<String>,
    pub raid_protection_enabled: Option<bool>,
    pub raid_join_threshold: Option<i32>,
    pub raid_join_interval: Option<i32>,
    pub raid_action: Option<String>,
    pub exempt_roles: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogSettingsDto {
    pub server_id: String,
    pub log_channel_id: Option<String>,
    pub log_mod_actions: bool,
    pub log_message_edits: bool,
    pub log_message_deletes: bool,
    pub log_member_joins: bool,
    pub log_member_leaves: bool,
    pub log_voice_activity: bool,
    pub log_role_changes: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateLogSettingsDto {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub log_channel_id: Option<Option<String>>,
    pub log_mod_actions: Option<bool>,
    pub log_message_edits: Option<bool>,
    pub log_message_deletes: Option<bool>,
    pub log_member_joins: Option<bool>,
    pub log_member_leaves: Option<bool>,
    pub log_voice_activity: Option<bool>,
    pub log_role_changes: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeSettingsDto {
    pub server_id: String,
    pub welcome_enabled: bool,
    pub welcome_channel_id: Option<String>,
    pub welcome_message: String,
    pub welcome_embed_enabled: bool,
    pub welcome_embed_color: String,
    pub goodbye_enabled: bool,
    pub goodbye_channel_id: Option<String>,
    pub goodbye_message: String,
    pub dm_welcome_enabled: bool,
    pub dm_welcome_message: String,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateWelcomeSettingsDto {
    pub welcome_enabled: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub welcome_channel_id: Option<Option<String>>,
    pub welcome_message: Option<String>,
    pub welcome_embed_enabled: Option<bool>,
    pub welcome_embed_color: Option<String>,
    pub goodbye_enabled: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub goodbye_channel_id: Option<Option<String>>,
    pub goodbye_message: Option<String>,
    pub dm_welcome_enabled: Option<bool>,
    pub dm_welcome_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AutoRoleSettingsDto {
    pub server_id: String,
    pub enabled: bool,
    pub join_roles: Vec<String>,
    pub verified_role_id: Option<String>,
    pub verification_enabled: bool,
    pub reaction_roles_enabled: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateAutoRoleSettingsDto {
    pub enabled: Option<bool>,
    pub join_roles: Option<Vec<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub verified_role_id: Option<Option<String>>,
    pub verification_enabled: Option<bool>,
    pub reaction_roles_enabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_fields() {
        let result =
            serde_json::from_str::<UpdateModSettingsDto>(r#"{"banEnabled":false,"isAdmin":true}"#);

        assert!(result.is_err());
    }

    #[test]
    fn accepts_partial_body() {
        let dto: UpdateModSettingsDto =
            serde_json::from_str(r#"{"banEnabled":false,"logChannelId":null}"#).unwrap();

        assert_eq!(dto.ban_enabled, Some(false));
        assert_eq!(dto.kick_enabled, None);
        assert_eq!(dto.log_channel_id, Some(None));
    }
}
