use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Indexes that the migrations create alongside the pickup point tables.
///
/// Entity-derived schemas carry columns and foreign keys only, so the uniqueness
/// rules are added by hand to keep the test schema equivalent to production.
const PVZ_INDEXES: [&str; 3] = [
    "CREATE UNIQUE INDEX idx_receiving_pickup_point_seq ON receiving (pickup_point_id, seq)",
    "CREATE UNIQUE INDEX idx_receiving_one_in_progress ON receiving (pickup_point_id) \
     WHERE status = 'in_progress'",
    "CREATE UNIQUE INDEX idx_goods_receiving_seq ON goods (receiving_id, seq)",
];

/// SQLite stand-ins for the `bigserial` sequences behind the `seq` columns.
///
/// A row inserted without `seq` gets the column default of 0, which the trigger
/// replaces with the next value for the table. Rows inserted with an explicit
/// `seq`, like the factories do, are left alone.
const PVZ_SEQUENCES: [&str; 2] = [
    "CREATE TRIGGER trg_receiving_seq AFTER INSERT ON receiving WHEN NEW.seq = 0 \
     BEGIN UPDATE receiving SET seq = (SELECT COALESCE(MAX(seq), 0) + 1 FROM receiving) \
     WHERE rowid = NEW.rowid; END",
    "CREATE TRIGGER trg_goods_seq AFTER INSERT ON goods WHEN NEW.seq = 0 \
     BEGIN UPDATE goods SET seq = (SELECT COALESCE(MAX(seq), 0) + 1 FROM goods) \
     WHERE rowid = NEW.rowid; END",
];

/// Builder for creating test contexts with customizable database schemas.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::PickupPoint;
///
/// let test = TestBuilder::new()
///     .with_table(PickupPoint)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Raw statements executed after all tables exist.
    statements: Vec<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
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

    /// Adds a raw SQL statement to run after the tables are created.
    pub fn with_statement(mut self, stmt: impl Into<String>) -> Self {
        self.statements.push(stmt.into());
        self
    }

    /// Adds the pickup point, reception and goods tables with their indexes.
    ///
    /// Use this for any test touching the reception or product lifecycle.
    pub fn with_pvz_tables(self) -> Self {
        let builder = self
            .with_table(PickupPoint)
            .with_table(Receiving)
            .with_table(Goods);

        PVZ_INDEXES
            .iter()
            .chain(PVZ_SEQUENCES.iter())
            .fold(builder, |builder, stmt| builder.with_statement(*stmt))
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_statements(self.statements).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
