use crate::server::{
    data::mod_action::ModActionRepository,
    model::mod_action::{CreateModActionParam, ModActionType},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

mod count_since_for_servers;
mod create;
mod get_by_server;
mod latest_for_servers;

async fn setup() -> TestContext {
    TestBuilder::new()
        .with_server_tables()
        .with_table(entity::prelude::ModAction)
        .build()
        .await
        .unwrap()
}
