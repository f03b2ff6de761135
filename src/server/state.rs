//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Session token signer/verifier
//! - Cookie policy

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, service::auth::token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` keeps its keys behind an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies session tokens.
    pub tokens: TokenService,

    /// Whether the session cookie carries the `Secure` attribute.
    pub secure_cookies: bool,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Session token service
    /// - `secure_cookies` - Whether to mark the session cookie `Secure`
    pub fn new(db: DatabaseConnection, tokens: TokenService, secure_cookies: bool) -> Self {
        Self {
            db,
            tokens,
            secure_cookies,
        }
    }

    /// Creates the application state from loaded configuration.
    pub fn from_config(db: DatabaseConnection, config: &Config) -> Self {
        Self::new(
            db,
            TokenService::new(config.jwt_secret.as_bytes()),
            config.secure_cookies,
        )
    }
}
