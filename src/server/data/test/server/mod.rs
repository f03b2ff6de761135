use crate::server::{data::server::ServerRepository, model::server::UpsertServerParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_owner;
mod upsert;
