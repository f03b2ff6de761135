use crate::server::{
    data::settings::ModSettingsRepository,
    model::settings::{ModSettings, UpdateModSettingsParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get;
mod upsert;
