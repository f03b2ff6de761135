use crate::server::{
    data::settings::TicketSettingsRepository,
    model::settings::{UpdateTicketSettingsParam, DEFAULT_TICKET_WELCOME_MESSAGE},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod upsert;
