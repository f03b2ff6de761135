use crate::server::{
    data::settings::AutoModSettingsRepository,
    model::settings::{RaidAction, SpamAction, UpdateAutoModSettingsParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod upsert;
