//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring the test database before
//! execution. Builder methods only queue work; everything runs in the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Schema
    run_migrations: bool,
    tables: Vec<TableCreateStatement>,

    // Database fixtures to insert
    stock_inits: Vec<(String, String, i32)>, // (style, size, quantity)
    other_items: Vec<(String, i32)>,         // (name, initial_quantity)
    clothing_usage: Vec<(String, String, String, i32)>, // (user, style, size, quantity)
    other_usage: Vec<(String, String, i32)>, // (user, other_item_name, quantity)
}

impl TestBuilder {
    /// Create a new TestBuilder with no schema and no fixtures.
    pub fn new() -> Self {
        Self {
            run_migrations: false,
            tables: Vec::new(),
            stock_inits: Vec::new(),
            other_items: Vec::new(),
            clothing_usage: Vec::new(),
            other_usage: Vec::new(),
        }
    }

    /// Run all migrations, creating every table and seeding the preset styles and sizes.
    pub fn with_migrations(mut self) -> Self {
        self.run_migrations = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Tables created this way carry the column-level constraints of the entity but not
    /// the composite indexes added by migrations. Use [`TestBuilder::with_migrations`]
    /// when a test depends on those.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use stockroom_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), stockroom_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::OtherItem)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an initial stock quantity for a (style, size) pair.
    pub fn with_stock_init(
        mut self,
        style: impl Into<String>,
        size: impl Into<String>,
        quantity: i32,
    ) -> Self {
        self.stock_inits.push((style.into(), size.into(), quantity));
        self
    }

    /// Insert an other-item with its initial quantity.
    pub fn with_other_item(mut self, name: impl Into<String>, initial_quantity: i32) -> Self {
        self.other_items.push((name.into(), initial_quantity));
        self
    }

    /// Insert a clothing usage ledger entry.
    pub fn with_clothing_usage(
        mut self,
        user: impl Into<String>,
        style: impl Into<String>,
        size: impl Into<String>,
        quantity: i32,
    ) -> Self {
        self.clothing_usage
            .push((user.into(), style.into(), size.into(), quantity));
        self
    }

    /// Insert an other-item usage ledger entry.
    pub fn with_other_usage(
        mut self,
        user: impl Into<String>,
        other_item_name: impl Into<String>,
        quantity: i32,
    ) -> Self {
        self.other_usage
            .push((user.into(), other_item_name.into(), quantity));
        self
    }

    /// Build the test context.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Runs migrations if requested, then creates any custom tables
    /// 2. Inserts stock, other-item, then usage fixtures
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Schema creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Schema
        if self.run_migrations {
            setup.with_migrations().await?;
        }
        setup.with_tables(self.tables).await?;

        // 2. Fixtures
        for (style, size, quantity) in self.stock_inits {
            setup.stock().insert_stock_init(&style, &size, quantity).await?;
        }

        for (name, initial_quantity) in self.other_items {
            setup
                .other_item()
                .insert_other_item(&name, initial_quantity)
                .await?;
        }

        for (user, style, size, quantity) in self.clothing_usage {
            setup
                .usage()
                .insert_clothing_usage(&user, &style, &size, quantity)
                .await?;
        }

        for (user, other_item_name, quantity) in self.other_usage {
            setup
                .usage()
                .insert_other_usage(&user, &other_item_name, quantity)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
