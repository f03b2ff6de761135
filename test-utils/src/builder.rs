use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Server, ModSettings};
///
/// let test = TestBuilder::new()
///     .with_table(Server)
///     .with_table(ModSettings)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference, since SQLite enforces foreign keys on these connections.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user and server tables every per-server table depends on.
    pub fn with_server_tables(self) -> Self {
        self.with_table(User).with_table(Server)
    }

    /// Adds every table in the schema in dependency order.
    ///
    /// Used by tests that drive the full HTTP router, where any endpoint may be hit.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new().with_all_tables().build().await?;
    /// ```
    pub fn with_all_tables(self) -> Self {
        self.with_server_tables()
            .with_table(ModSettings)
            .with_table(TicketSettings)
            .with_table(AutoModSettings)
            .with_table(LogSettings)
            .with_table(WelcomeSettings)
            .with_table(AutoRoleSettings)
            .with_table(Ticket)
            .with_table(ModAction)
            .with_table(LogEvent)
            .with_table(CustomCommand)
            .with_table(ReactionRole)
            .with_table(ServerAnalytics)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
