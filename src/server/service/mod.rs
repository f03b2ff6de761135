//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Rejecting malformed input with 400 responses before any write
//! - **Orchestration**: Coordinating repository calls (e.g. dashboard aggregates)
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

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
