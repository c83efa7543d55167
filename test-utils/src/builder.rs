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
/// use entity::prelude::{User, Land};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Land)
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
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
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

    /// Adds the tables required for user and land operations.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User).with_table(Land)
    }

    /// Adds all tables required for marketplace operations.
    ///
    /// Adds, in dependency order: User, Product, Order, OrderItem, Billing, Payment,
    /// PaymentItem and Notification.
    pub fn with_marketplace_tables(self) -> Self {
        self.with_table(User)
            .with_table(Product)
            .with_table(Order)
            .with_table(OrderItem)
            .with_table(Billing)
            .with_table(Payment)
            .with_table(PaymentItem)
            .with_table(Notification)
    }

    /// Adds the tables required for the community features: Q&A, forum posts and
    /// reply notices.
    pub fn with_community_tables(self) -> Self {
        self.with_table(User)
            .with_table(ForumEntry)
            .with_table(Post)
            .with_table(PostReply)
            .with_table(Notification)
    }

    /// Adds every AgroSphere table.
    pub fn with_all_tables(self) -> Self {
        self.with_table(User)
            .with_table(Land)
            .with_table(Product)
            .with_table(Order)
            .with_table(OrderItem)
            .with_table(Billing)
            .with_table(Payment)
            .with_table(PaymentItem)
            .with_table(Notification)
            .with_table(CropTracker)
            .with_table(MarketPrice)
            .with_table(ForumEntry)
            .with_table(Post)
            .with_table(PostReply)
    }

    /// Builds the test context and creates all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an in-memory database containing the tables
    /// - `Err(TestError::Database)` - Failed to connect or create a table
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        if !self.tables.is_empty() {
            context.with_tables(self.tables).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
