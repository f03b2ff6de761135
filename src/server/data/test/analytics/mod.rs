use crate::server::{
    data::analytics::ServerAnalyticsRepository,
    model::analytics::{DateRange, UpsertAnalyticsParam},
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

mod get_range;
mod upsert_daily;

async fn setup() -> TestContext {
    TestBuilder::new()
        .with_server_tables()
        .with_table(entity::prelude::ServerAnalytics)
        .build()
        .await
        .unwrap()
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
}

fn param(server_id: &str, date: NaiveDate, member_count: i32) -> UpsertAnalyticsParam {
    UpsertAnalyticsParam {
        server_id: server_id.to_string(),
        date,
        member_count,
        message_count: 0,
        commands_used: 0,
        tickets_created: 0,
        mod_actions_count: 0,
        active_members: 0,
    }
}
