use migration::{Migrator, MigratorTrait};
use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection,
};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Environment variable naming the Postgres server used by lock and isolation tests.
pub const TEST_DATABASE_URL: &str = "TEST_DATABASE_URL";

/// Pool size of Postgres test contexts, enough for every task of a race to hold a
/// connection at once.
const POSTGRES_MAX_CONNECTIONS: u32 = 16;

/// Test context containing database connection, session, and test environment setup.
///
/// Provides an in-memory SQLite database connection and session for isolated
/// unit and integration testing. Both the database and session are created lazily on first
/// access and persist for the lifetime of the test context.
pub struct TestContext {
    /// Optional database connection to in-memory SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called.
    pub db: Option<DatabaseConnection>,

    /// Optional session instance for session handling.
    ///
    /// Initialized lazily when `session()` is first called. Uses the same
    /// in-memory SQLite database as `db` for session storage.
    pub session: Option<Session>,

    /// Schema created for a Postgres context, dropped by `teardown()`.
    pub schema: Option<String>,
}

impl TestContext {
    /// Creates a new empty test context.
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connection
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
            schema: None,
        }
    }

    /// Creates a context backed by the Postgres server in `TEST_DATABASE_URL`.
    ///
    /// SQLite has no row locks and the in-memory pool holds one connection, so row
    /// locking and serializable aborts can only be observed here. Every context
    /// migrates its own schema, which keeps parallel tests apart.
    ///
    /// # Returns
    /// - `Ok(Some(TestContext))` - Migrated context with a pool of several connections
    /// - `Ok(None)` - `TEST_DATABASE_URL` is not set
    /// - `Err(TestError::Database)` - Connecting, creating the schema or migrating failed
    pub async fn postgres() -> Result<Option<Self>, TestError> {
        let Ok(url) = std::env::var(TEST_DATABASE_URL) else {
            return Ok(None);
        };

        let schema = format!("pvz_test_{}", uuid::Uuid::new_v4().simple());

        let admin = Database::connect(url.as_str()).await?;
        admin
            .execute_unprepared(&format!("CREATE SCHEMA \"{schema}\""))
            .await?;
        admin.close().await?;

        let mut opt = ConnectOptions::new(url);
        opt.max_connections(POSTGRES_MAX_CONNECTIONS)
            .sqlx_logging(false)
            .set_schema_search_path(schema.clone());

        let db = Database::connect(opt).await?;
        Migrator::up(&db, None).await?;

        Ok(Some(Self {
            db: Some(db),
            session: None,
            schema: Some(schema),
        }))
    }

    /// Drops the schema of a Postgres context and closes its pool.
    ///
    /// Does nothing for SQLite contexts.
    pub async fn teardown(mut self) -> Result<(), TestError> {
        let (Some(db), Some(schema)) = (self.db.take(), self.schema.take()) else {
            return Ok(());
        };

        db.execute_unprepared(&format!("DROP SCHEMA \"{schema}\" CASCADE"))
            .await?;
        db.close().await?;

        Ok(())
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// The pool is capped at a single connection: every SQLite connection to `:memory:`
    /// opens its own database, so a second connection would not see the schema. Concurrent
    /// transactions in tests therefore queue on the pool and run one after another.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let mut opt = ConnectOptions::new("sqlite::memory:");
                opt.max_connections(1).min_connections(1).sqlx_logging(false);

                let db = Database::connect(opt).await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Executes raw SQL statements such as index definitions.
    ///
    /// Used for schema objects that cannot be derived from entities, like the
    /// partial unique index on open receptions.
    pub async fn with_statements(&mut self, stmts: Vec<String>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute_unprepared(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates the test session instance.
    ///
    /// On first call, this method will:
    /// 1. Initialize the database connection if not already done
    /// 2. Create and migrate the session store table
    /// 3. Create a new session instance
    ///
    /// # Returns
    /// - `Ok(&Session)` - Reference to the session instance
    /// - `Err(TestError)` - Failed to initialize database connection or session table
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let db = self.database().await?;

                let pool = db.get_sqlite_connection_pool();
                let session_store = SqliteStore::new(pool.clone());

                session_store
                    .migrate()
                    .await
                    .map_err(|e| TestError::Session(e.to_string()))?;

                let session = Session::new(
                    None,
                    Arc::new(session_store),
                    Some(Expiry::OnInactivity(Duration::days(1))),
                );

                let session_ref = self.session.insert(session);

                Ok(&*session_ref)
            }
        }
    }

    /// Gets or creates both database and session references.
    ///
    /// Avoids borrow checker issues when calling `database()` and `session()` separately.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(TestError::Session(
                "database or session missing after initialization".to_string(),
            )),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
