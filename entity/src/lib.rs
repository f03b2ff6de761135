//! SeaORM entities for the Zyx dashboard schema.
//!
//! One module per table. Every per-server table references `server.id`
//! and is removed together with its server.

pub mod prelude;

pub mod auto_mod_settings;
pub mod auto_role_settings;
pub mod custom_command;
pub mod log_event;
pub mod log_settings;
pub mod mod_action;
pub mod mod_settings;
pub mod reaction_role;
pub mod server;
pub mod server_analytics;
pub mod ticket;
pub mod ticket_settings;
pub mod user;
pub mod welcome_settings;
