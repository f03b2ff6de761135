//! Per-server settings domain models and parameters.
//!
//! Every settings entity is a one-to-one row keyed by server. When no row exists yet,
//! reads return [`defaults`](ModSettings::defaults) with `updated_at` unset; the first
//! write creates the row seeded from the same defaults. Update parameters carry only
//! the fields the client supplied, so unspecified columns keep their stored values.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::settings::{
        AutoModSettingsDto, AutoRoleSettingsDto, LogSettingsDto, ModSettingsDto,
        TicketSettingsDto, UpdateAutoModSettingsDto, UpdateAutoRoleSettingsDto,
        UpdateLogSettingsDto, UpdateModSettingsDto, UpdateTicketSettingsDto,
        UpdateWelcomeSettingsDto, WelcomeSettingsDto,
    },
    server::{error::AppError, util::parse::parse_string_list},
};

pub const DEFAULT_TICKET_WELCOME_MESSAGE: &str =
    "Thank you for creating a ticket! Support will be with you shortly.";
pub const DEFAULT_WELCOME_MESSAGE: &str =
    "Welcome to the server, {user}! We're glad to have you here.";
pub const DEFAULT_GOODBYE_MESSAGE: &str = "Goodbye {user}, we hope to see you again!";
pub const DEFAULT_DM_WELCOME_MESSAGE: &str =
    "Welcome to {server}! Please read our rules and enjoy your stay.";
pub const DEFAULT_EMBED_COLOR: &str = "#5865F2";

/// Punishment applied when a member trips the spam filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpamAction {
    Mute,
    Kick,
    Ban,
}

impl SpamAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mute => "mute",
            Self::Kick => "kick",
            Self::Ban => "ban",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "mute" => Ok(Self::Mute),
            "kick" => Ok(Self::Kick),
            "ban" => Ok(Self::Ban),
            _ => Err(AppError::bad_request("spamAction must be one of mute, kick, ban")),
        }
    }
}

/// Response to a message containing a filtered word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordFilterAction {
    Delete,
    Warn,
    Mute,
}

impl WordFilterAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Warn => "warn",
            Self::Mute => "mute",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "delete" => Ok(Self::Delete),
            "warn" => Ok(Self::Warn),
            "mute" => Ok(Self::Mute),
            _ => Err(AppError::bad_request(
                "wordFilterAction must be one of delete, warn, mute",
            )),
        }
    }
}

/// Response to a burst of joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaidAction {
    Lockdown,
    Kick,
    Ban,
}

impl RaidAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lockdown => "lockdown",
            Self::Kick => "kick",
            Self::Ban => "ban",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "lockdown" => Ok(Self::Lockdown),
            "kick" => Ok(Self::Kick),
            "ban" => Ok(Self::Ban),
            _ => Err(AppError::bad_request(
                "raidAction must be one of lockdown, kick, ban",
            )),
        }
    }
}

/// Which moderation commands are enabled and who may use them.
#[derive(Debug, Clone, PartialEq)]
pub struct ModSettings {
    pub server_id: String,
    pub ban_enabled: bool,
    pub kick_enabled: bool,
    pub mute_enabled: bool,
    pub warn_enabled: bool,
    pub mod_roles: Vec<String>,
    pub log_channel_id: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ModSettings {
    pub fn defaults(server_id: &str) -> Self {
        Self {
            server_id: server_id.to_string(),
            ban_enabled: true,
            kick_enabled: true,
            mute_enabled: true,
            warn_enabled: true,
            mod_roles: Vec::new(),
            log_channel_id: None,
            updated_at: None,
        }
    }

    pub fn from_entity(entity: entity::mod_settings::Model) -> Result<Self, DbErr> {
        Ok(Self {
            server_id: entity.server_id,
            ban_enabled: entity.ban_enabled,
            kick_enabled: entity.kick_enabled,
            mute_enabled: entity.mute_enabled,
            warn_enabled: entity.warn_enabled,
            mod_roles: parse_string_list(entity.mod_roles)?,
            log_channel_id: entity.log_channel_id,
            updated_at: Some(entity.updated_at),
        })
    }

    pub fn into_dto(self) -> ModSettingsDto {
        ModSettingsDto {
            server_id: self.server_id,
            ban_enabled: self.ban_enabled,
            kick_enabled: self.kick_enabled,
            mute_enabled: self.mute_enabled,
            warn_enabled: self.warn_enabled,
            mod_roles: self.mod_roles,
            log_channel_id: self.log_channel_id,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateModSettingsParam {
    pub ban_enabled: Option<bool>,
    pub kick_enabled: Option<bool>,
    pub mute_enabled: Option<bool>,
    pub warn_enabled: Option<bool>,
    pub mod_roles: Option<Vec<String>>,
    pub log_channel_id: Option<Option<String>>,
}

impl UpdateModSettingsParam {
    pub fn from_dto(dto: UpdateModSettingsDto) -> Self {
        Self {
            ban_enabled: dto.ban_enabled,
            kick_enabled: dto.kick_enabled,
            mute_enabled: dto.mute_enabled,
            warn_enabled: dto.warn_enabled,
            mod_roles: dto.mod_roles,
            log_channel_id: dto.log_channel_id,
        }
    }
}

/// Support ticket configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketSettings {
    pub server_id: String,
    pub enabled: bool,
    /// Discord category new ticket channels are created under.
    pub category_id: Option<String>,
    pub support_roles: Vec<String>,
    pub welcome_message: String,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TicketSettings {
    pub fn defaults(server_id: &str) -> Self {
        Self {
            server_id: server_id.to_string(),
            enabled: true,
            category_id: None,
            support_roles: Vec::new(),
            welcome_message: DEFAULT_TICKET_WELCOME_MESSAGE.to_string(),
            updated_at: None,
        }
    }

    pub fn from_entity(entity: entity::ticket_settings::Model) -> Result<Self, DbErr> {
        Ok(Self {
            server_id: entity.server_id,
            enabled: entity.enabled,
            category_id: entity.category_id,
            support_roles: parse_string_list(entity.support_roles)?,
            welcome_message: entity.welcome_message,
            updated_at: Some(entity.updated_at),
        })
    }

    pub fn into_dto(self) -> TicketSettingsDto {
        TicketSettingsDto {
            server_id: self.server_id,
            enabled: self.enabled,
            category_id: self.category_id,
            support_roles: self.support_roles,
            welcome_message: self.welcome_message,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTicketSettingsParam {
    pub enabled: Option<bool>,
    pub category_id: Option<Option<String>>,
    pub support_roles: Option<Vec<String>>,
    pub welcome_message: Option<String>,
}

impl UpdateTicketSettingsParam {
    pub fn from_dto(dto: UpdateTicketSettingsDto) -> Self {
        Self {
            enabled: dto.enabled,
            category_id: dto.category_id,
            support_roles: dto.support_roles,
            welcome_message: dto.welcome_message,
        }
    }
}

/// Spam, word filter and raid protection thresholds for the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoModSettings {
    pub server_id: String,
    pub spam_enabled: bool,
    /// Messages allowed within `spam_interval` seconds.
    pub spam_threshold: i32,
    pub spam_interval: i32,
    pub spam_action: String,
    pub word_filter_enabled: bool,
    pub filtered_words: Vec<String>,
    pub word_filter_action: String,
    pub raid_protection_enabled: bool,
    /// Joins allowed within `raid_join_interval` seconds.
    pub raid_join_threshold: i32,
    pub raid_join_interval: i32,
    pub raid_action: String,
    pub exempt_roles: Vec<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl AutoModSettings {
    pub fn defaults(server_id: &str) -> Self {
        Self {
            server_id: server_id.to_string(),
            spam_enabled: false,
            spam_threshold: 5,
            spam_interval: 5,
            spam_action: SpamAction::Mute.as_str().to_string(),
            word_filter_enabled: false,
            filtered_words: Vec::new(),
            word_filter_action: WordFilterAction::Delete.as_str().to_string(),
            raid_protection_enabled: false,
            raid_join_threshold: 10,
            raid_join_interval: 10,
            raid_action: RaidAction::Lockdown.as_str().to_string(),
            exempt_roles: Vec::new(),
            updated_at: None,
        }
    }

    pub fn from_entity(entity: entity::auto_mod_settings::Model) -> Result<Self, DbErr> {
        Ok(Self {
            server_id: entity.server_id,
            spam_enabled: entity.spam_enabled,
            spam_threshold: entity.spam_threshold,
            spam_interval: entity.spam_interval,
            spam_action: entity.spam_action,
            word_filter_enabled: entity.word_filter_enabled,
            filtered_words: parse_string_list(entity.filtered_words)?,
            word_filter_action: entity.word_filter_action,
            raid_protection_enabled: entity.raid_protection_enabled,
            raid_join_threshold: entity.raid_join_threshold,
            raid_join_interval: entity.raid_join_interval,
            raid_action: entity.raid_action,
            exempt_roles: parse_string_list(entity.exempt_roles)?,
            updated_at: Some(entity.updated_at),
        })
    }

    pub fn into_dto(self) -> AutoModSettingsDto {
        AutoModSettingsDto {
            server_id: self.server_id,
            spam_enabled: self.spam_enabled,
            spam_threshold: self.spam_threshold,
            spam_interval: self.spam_interval,
            spam_action: self.spam_action,
            word_filter_enabled: self.word_filter_enabled,
            filtered_words: self.filtered_words,
            word_filter_action: self.word_filter_action,
            raid_protection_enabled: self.raid_protection_enabled,
            raid_join_threshold: self.raid_join_threshold,
            raid_join_interval: self.raid_join_interval,
            raid_action: self.raid_action,
            exempt_roles: self.exempt_roles,
            updated_at: self.updated_at,
        }
    }
}

/// Action fields are stored as their lowercase names once validated.
#[derive(Debug, Clone, Default)]
pub struct UpdateAutoModSettingsParam {
    pub spam_enabled: Option<bool>,
    pub spam_threshold: Option<i32>,
    pub spam_interval: Option<i32>,
    pub spam_action: Option<SpamAction>,
    pub word_filter_enabled: Option<bool>,
    pub filtered_words: Option<Vec<String>>,
    pub word_filter_action: Option<WordFilterAction>,
    pub raid_protection_enabled: Option<bool>,
    pub raid_join_threshold: Option<i32>,
    pub raid_join_interval: Option<i32>,
    pub raid_action: Option<RaidAction>,
    pub exempt_roles: Option<Vec<String>>,
}

impl UpdateAutoModSettingsParam {
    /// Converts the request body, rejecting unknown action names.
    pub fn from_dto(dto: UpdateAutoModSettingsDto) -> Result<Self, AppError> {
        Ok(Self {
            spam_enabled: dto.spam_enabled,
            spam_threshold: dto.spam_threshold,
            spam_interval: dto.spam_interval,
            spam_action: dto.spam_action.as_deref().map(SpamAction::parse).transpose()?,
            word_filter_enabled: dto.word_filter_enabled,
            filtered_words: dto.filtered_words,
            word_filter_action: dto
                .word_filter_action
                .as_deref()
                .map(WordFilterAction::parse)
                .transpose()?,
            raid_protection_enabled: dto.raid_protection_enabled,
            raid_join_threshold: dto.raid_join_threshold,
            raid_join_interval: dto.raid_join_interval,
            raid_action: dto.raid_action.as_deref().map(RaidAction::parse).transpose()?,
            exempt_roles: dto.exempt_roles,
        })
    }
}

/// Which server events the bot mirrors into the log channel.
#[derive(Debug, Clone, PartialEq)]
pub struct LogSettings {
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

impl LogSettings {
    pub fn defaults(server_id: &str) -> Self {
        Self {
            server_id: server_id.to_string(),
            log_channel_id: None,
            log_mod_actions: true,
            log_message_edits: false,
            log_message_deletes: false,
            log_member_joins: true,
            log_member_leaves: true,
            log_voice_activity: false,
            log_role_changes: false,
            updated_at: None,
        }
    }

    pub fn from_entity(entity: entity::log_settings::Model) -> Self {
        Self {
            server_id: entity.server_id,
            log_channel_id: entity.log_channel_id,
            log_mod_actions: entity.log_mod_actions,
            log_message_edits: entity.log_message_edits,
            log_message_deletes: entity.log_message_deletes,
            log_member_joins: entity.log_member_joins,
            log_member_leaves: entity.log_member_leaves,
            log_voice_activity: entity.log_voice_activity,
            log_role_changes: entity.log_role_changes,
            updated_at: Some(entity.updated_at),
        }
    }

    pub fn into_dto(self) -> LogSettingsDto {
        LogSettingsDto {
            server_id: self.server_id,
            log_channel_id: self.log_channel_id,
            log_mod_actions: self.log_mod_actions,
            log_message_edits: self.log_message_edits,
            log_message_deletes: self.log_message_deletes,
            log_member_joins: self.log_member_joins,
            log_member_leaves: self.log_member_leaves,
            log_voice_activity: self.log_voice_activity,
            log_role_changes: self.log_role_changes,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateLogSettingsParam {
    pub log_channel_id: Option<Option<String>>,
    pub log_mod_actions: Option<bool>,
    pub log_message_edits: Option<bool>,
    pub log_message_deletes: Option<bool>,
    pub log_member_joins: Option<bool>,
    pub log_member_leaves: Option<bool>,
    pub log_voice_activity: Option<bool>,
    pub log_role_changes: Option<bool>,
}

impl UpdateLogSettingsParam {
    pub fn from_dto(dto: UpdateLogSettingsDto) -> Self {
        Self {
            log_channel_id: dto.log_channel_id,
            log_mod_actions: dto.log_mod_actions,
            log_message_edits: dto.log_message_edits,
            log_message_deletes: dto.log_message_deletes,
            log_member_joins: dto.log_member_joins,
            log_member_leaves: dto.log_member_leaves,
            log_voice_activity: dto.log_voice_activity,
            log_role_changes: dto.log_role_changes,
        }
    }
}

/// Greeting and farewell messages.
///
/// Messages may contain the `{user}` and `{server}` placeholders, which the bot
/// substitutes when posting.
#[derive(Debug, Clone, PartialEq)]
pub struct WelcomeSettings {
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

impl WelcomeSettings {
    pub fn defaults(server_id: &str) -> Self {
        Self {
            server_id: server_id.to_string(),
            welcome_enabled: false,
            welcome_channel_id: None,
            welcome_message: DEFAULT_WELCOME_MESSAGE.to_string(),
            welcome_embed_enabled: true,
            welcome_embed_color: DEFAULT_EMBED_COLOR.to_string(),
            goodbye_enabled: false,
            goodbye_channel_id: None,
            goodbye_message: DEFAULT_GOODBYE_MESSAGE.to_string(),
            dm_welcome_enabled: false,
            dm_welcome_message: DEFAULT_DM_WELCOME_MESSAGE.to_string(),
            updated_at: None,
        }
    }

    pub fn from_entity(entity: entity::welcome_settings::Model) -> Self {
        Self {
            server_id: entity.server_id,
            welcome_enabled: entity.welcome_enabled,
            welcome_channel_id: entity.welcome_channel_id,
            welcome_message: entity.welcome_message,
            welcome_embed_enabled: entity.welcome_embed_enabled,
            welcome_embed_color: entity.welcome_embed_color,
            goodbye_enabled: entity.goodbye_enabled,
            goodbye_channel_id: entity.goodbye_channel_id,
            goodbye_message: entity.goodbye_message,
            dm_welcome_enabled: entity.dm_welcome_enabled,
            dm_welcome_message: entity.dm_welcome_message,
            updated_at: Some(entity.updated_at),
        }
    }

    pub fn into_dto(self) -> WelcomeSettingsDto {
        WelcomeSettingsDto {
            server_id: self.server_id,
            welcome_enabled: self.welcome_enabled,
            welcome_channel_id: self.welcome_channel_id,
            welcome_message: self.welcome_message,
            welcome_embed_enabled: self.welcome_embed_enabled,
            welcome_embed_color: self.welcome_embed_color,
            goodbye_enabled: self.goodbye_enabled,
            goodbye_channel_id: self.goodbye_channel_id,
            goodbye_message: self.goodbye_message,
            dm_welcome_enabled: self.dm_welcome_enabled,
            dm_welcome_message: self.dm_welcome_message,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateWelcomeSettingsParam {
    pub welcome_enabled: Option<bool>,
    pub welcome_channel_id: Option<Option<String>>,
    pub welcome_message: Option<String>,
    pub welcome_embed_enabled: Option<bool>,
    pub welcome_embed_color: Option<String>,
    pub goodbye_enabled: Option<bool>,
    pub goodbye_channel_id: Option<Option<String>>,
    pub goodbye_message: Option<String>,
    pub dm_welcome_enabled: Option<bool>,
    pub dm_welcome_message: Option<String>,
}

impl UpdateWelcomeSettingsParam {
    pub fn from_dto(dto: UpdateWelcomeSettingsDto) -> Self {
        Self {
            welcome_enabled: dto.welcome_enabled,
            welcome_channel_id: dto.welcome_channel_id,
            welcome_message: dto.welcome_message,
            welcome_embed_enabled: dto.welcome_embed_enabled,
            welcome_embed_color: dto.welcome_embed_color,
            goodbye_enabled: dto.goodbye_enabled,
            goodbye_channel_id: dto.goodbye_channel_id,
            goodbye_message: dto.goodbye_message,
            dm_welcome_enabled: dto.dm_welcome_enabled,
            dm_welcome_message: dto.dm_welcome_message,
        }
    }
}

/// Roles granted automatically on join or after verification.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoRoleSettings {
    pub server_id: String,
    pub enabled: bool,
    pub join_roles: Vec<String>,
    pub verified_role_id: Option<String>,
    pub verification_enabled: bool,
    pub reaction_roles_enabled: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

impl AutoRoleSettings {
    pub fn defaults(server_id: &str) -> Self {
        Self {
            server_id: server_id.to_string(),
            enabled: false,
            join_roles: Vec::new(),
            verified_role_id: None,
            verification_enabled: false,
            reaction_roles_enabled: false,
            updated_at: None,
        }
    }

    pub fn from_entity(entity: entity::auto_role_settings::Model) -> Result<Self, DbErr> {
        Ok(Self {
            server_id: entity.server_id,
            enabled: entity.enabled,
            join_roles: parse_string_list(entity.join_roles)?,
            verified_role_id: entity.verified_role_id,
            verification_enabled: entity.verification_enabled,
            reaction_roles_enabled: entity.reaction_roles_enabled,
            updated_at: Some(entity.updated_at),
        })
    }

    pub fn into_dto(self) -> AutoRoleSettingsDto {
        AutoRoleSettingsDto {
            server_id: self.server_id,
            enabled: self.enabled,
            join_roles: self.join_roles,
            verified_role_id: self.verified_role_id,
            verification_enabled: self.verification_enabled,
            reaction_roles_enabled: self.reaction_roles_enabled,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAutoRoleSettingsParam {
    pub enabled: Option<bool>,
    pub join_roles: Option<Vec<String>>,
    pub verified_role_id: Option<Option<String>>,
    pub verification_enabled: Option<bool>,
    pub reaction_roles_enabled: Option<bool>,
}

impl UpdateAutoRoleSettingsParam {
    pub fn from_dto(dto: UpdateAutoRoleSettingsDto) -> Self {
        Self {
            enabled: dto.enabled,
            join_roles: dto.join_roles,
            verified_role_id: dto.verified_role_id,
            verification_enabled: dto.verification_enabled,
            reaction_roles_enabled: dto.reaction_roles_enabled,
        }
    }
}
