//! HTTP request handlers.
//!
//! Handlers check access, convert DTOs to params, call a service and convert the
//! resulting domain model back to a DTO.

pub mod analytics;
pub mod auth;
pub mod custom_command;
pub mod dashboard;
pub mod log_event;
pub mod mod_action;
pub mod reaction_role;
pub mod server;
pub mod settings;
pub mod ticket;
