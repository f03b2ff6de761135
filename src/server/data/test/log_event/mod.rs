use crate::server::{data::log_event::LogEventRepository, model::log_event::CreateLogEventParam};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

mod create;
mod get_by_server;

async fn setup() -> TestContext {
    TestBuilder::new()
        .with_server_tables()
        .with_table(entity::prelude::LogEvent)
        .build()
        .await
        .unwrap()
}
