use crate::server::{
    data::settings::WelcomeSettingsRepository,
    model::settings::{UpdateWelcomeSettingsParam, DEFAULT_EMBED_COLOR, DEFAULT_GOODBYE_MESSAGE},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod upsert;
