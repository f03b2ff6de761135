use crate::server::{
    data::reaction_role::ReactionRoleRepository, model::reaction_role::CreateReactionRoleParam,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

mod create;
mod delete;

async fn setup() -> TestContext {
    TestBuilder::new()
        .with_server_tables()
        .with_table(entity::prelude::ReactionRole)
        .build()
        .await
        .unwrap()
}
