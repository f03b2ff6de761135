use crate::server::{data::settings::LogSettingsRepository, model::settings::UpdateLogSettingsParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod upsert;
