use crate::server::{
    data::settings::AutoRoleSettingsRepository, model::settings::UpdateAutoRoleSettingsParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod upsert;
