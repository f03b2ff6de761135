//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation of the dashboard API,
//! including endpoints, business logic, data access and infrastructure. The backend
//! uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Validation and orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session cookie handling and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, token keys, cookie policy)
//! - **Startup** (`startup`) - Tracing and database initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** verifies the session cookie for protected routes
//! 3. **Controller** checks server ownership, converts DTOs to params, calls service
//! 4. **Service** validates input and orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
mod test;
