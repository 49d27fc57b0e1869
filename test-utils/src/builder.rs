use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

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
/// use entity::prelude::{User, Faq};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Faq)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user and verification code tables used by the auth flows.
    pub fn with_auth_tables(self) -> Self {
        self.with_table(User).with_table(VerificationCode)
    }

    /// Adds all tables required for event, inscription and attendance operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - Event
    /// - EventOrganizer
    /// - Inscription
    /// - Participation (with its unique (user_id, event_id) index)
    ///
    /// The unique entry QR code index on Event is added as well.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_attendance_tables(mut self) -> Self {
        self.indexes.push(
            Index::create()
                .name("idx-event-entry_qr_code")
                .table(Event)
                .col(entity::event::Column::EntryQrCode)
                .unique()
                .to_owned(),
        );
        self.indexes.push(
            Index::create()
                .name("idx-participation-user_id-event_id")
                .table(Participation)
                .col(entity::participation::Column::UserId)
                .col(entity::participation::Column::EventId)
                .unique()
                .to_owned(),
        );

        self.with_table(User)
            .with_table(Event)
            .with_table(EventOrganizer)
            .with_table(Inscription)
            .with_table(Participation)
    }

    /// Adds every table of the schema.
    ///
    /// Used by HTTP-level tests that drive the full router.
    pub fn with_all_tables(self) -> Self {
        self.with_attendance_tables()
            .with_table(VerificationCode)
            .with_table(Faq)
            .with_table(Review)
            .with_table(Image)
    }

    /// Builds the test context, creating every configured table and index.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with a connected, initialized database
    /// - `Err(TestError::Database)` - Failed to create the schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
