use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database or creating the schema failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Preparing the session store failed.
    #[error("Failed to prepare session store: {0}")]
    Session(String),
}
