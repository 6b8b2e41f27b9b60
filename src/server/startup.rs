use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::server::{config::Config, error::AppError};

/// Connects to the Postgres database and runs pending migrations.
///
/// Establishes the process-wide connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up-to-date.
/// This function must complete successfully before the application can serve requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool size
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions hold only the caller's role and expire after a day of inactivity.
///
/// # Arguments
/// - `db` - Database connection whose pool stores the sessions
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to be attached to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<PostgresStore>, AppError> {
    let pool = db.get_postgres_connection_pool();
    let session_store = PostgresStore::new(pool.clone());

    session_store.migrate().await?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(1))))
}
