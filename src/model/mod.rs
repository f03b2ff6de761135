//! Request and response bodies of the HTTP API.
//!
//! All bodies are camelCase JSON. Update bodies reject unknown fields so that
//! unexpected client input is never persisted.

pub mod analytics;
pub mod api;
pub mod custom_command;
pub mod dashboard;
pub mod log_event;
pub mod mod_action;
pub mod reaction_role;
pub mod server;
pub mod settings;
pub mod ticket;
pub mod user;
