use crate::server::{data::ticket::TicketRepository, model::ticket::CreateTicketParam};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

mod close;
mod count_open_for_servers;
mod create;
mod get_by_server;

async fn setup() -> TestContext {
    TestBuilder::new()
        .with_server_tables()
        .with_table(entity::prelude::Ticket)
        .build()
        .await
        .unwrap()
}
