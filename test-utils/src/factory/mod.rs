//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let (owner, server) = factory::helpers::create_server_with_owner(&db).await?;
//!     let ticket = factory::ticket::create_ticket(&db, &server.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let ticket = factory::ticket::TicketFactory::new(&db, &server.id)
//!     .status("closed")
//!     .created_at(Utc::now() - Duration::hours(1))
//!     .build()
//!     .await?;
//! ```

pub mod custom_command;
pub mod helpers;
pub mod log_event;
pub mod mod_action;
pub mod reaction_role;
pub mod server;
pub mod ticket;
pub mod user;

pub use custom_command::create_custom_command;
pub use log_event::create_log_event;
pub use mod_action::create_mod_action;
pub use reaction_role::create_reaction_role;
pub use server::create_server;
pub use ticket::create_ticket;
pub use user::create_user;
