use crate::server::{
    data::custom_command::CustomCommandRepository,
    model::custom_command::{CreateCustomCommandParam, UpdateCustomCommandParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

mod create;
mod delete;
mod increment_usage;
mod update;

async fn setup() -> TestContext {
    TestBuilder::new()
        .with_server_tables()
        .with_table(entity::prelude::CustomCommand)
        .build()
        .await
        .unwrap()
}
