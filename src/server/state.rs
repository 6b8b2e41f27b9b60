//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::time::Duration;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool, so
/// clones share the same pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// Created once at startup and shared by every request. No request holds a
    /// connection across more than one transaction.
    pub db: DatabaseConnection,

    /// Deadline applied to each reception and product lifecycle operation.
    pub operation_timeout: Duration,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `operation_timeout` - Deadline for lifecycle operations
    pub fn new(db: DatabaseConnection, operation_timeout: Duration) -> Self {
        Self {
            db,
            operation_timeout,
        }
    }
}
