//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every repository method is a single round trip to the database.

pub mod analytics;
pub mod custom_command;
pub mod log_event;
pub mod mod_action;
pub mod reaction_role;
pub mod server;
pub mod settings;
pub mod ticket;
pub mod user;

#[cfg(test)]
mod test;
