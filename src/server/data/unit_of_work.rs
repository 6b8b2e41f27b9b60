use sea_orm::{
    DatabaseConnection, DatabaseTransaction, DbErr, IsolationLevel, RuntimeErr, SqlxError,
    TransactionTrait,
};

/// SQLSTATE raised when Postgres aborts a transaction to keep the schedule serializable.
const SERIALIZATION_FAILURE: &str = "40001";

/// A single serializable transaction wrapping one lifecycle operation.
///
/// Every reception or product mutation acquires exactly one unit, performs its
/// locking reads and its write through [`UnitOfWork::transaction`], and hands
/// the outcome to [`UnitOfWork::finish`]. A unit that is dropped without being
/// finished, for example when its future is cancelled by a deadline, is rolled
/// back by the driver.
pub struct UnitOfWork {
    txn: DatabaseTransaction,
}

impl UnitOfWork {
    /// Opens a new transaction at `SERIALIZABLE` isolation.
    ///
    /// Waits for a free pool connection, so this is where a saturated pool or a
    /// held lock first shows up as latency.
    ///
    /// # Returns
    /// - `Ok(UnitOfWork)` - Transaction started
    /// - `Err(DbErr)` - No connection could be acquired or BEGIN failed
    pub async fn begin(db: &DatabaseConnection) -> Result<Self, DbErr> {
        let txn = db
            .begin_with_config(Some(IsolationLevel::Serializable), None)
            .await?;

        Ok(Self { txn })
    }

    /// Connection handle for queries that must run inside this unit.
    pub fn transaction(&self) -> &DatabaseTransaction {
        &self.txn
    }

    /// Commits on `Ok` and rolls back on `Err`, returning the original outcome.
    ///
    /// A failed commit replaces the success with the commit error. A failed
    /// rollback is only logged and the original error is returned.
    ///
    /// # Arguments
    /// - `result` - Outcome of the work done through [`UnitOfWork::transaction`]
    pub async fn finish<T, E>(self, result: Result<T, E>) -> Result<T, E>
    where
        E: From<DbErr> + std::fmt::Display,
    {
        match result {
            Ok(value) => {
                self.txn.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = self.txn.rollback().await {
                    tracing::warn!(
                        "Failed to roll back transaction after '{}': {}",
                        err,
                        rollback_err
                    );
                }
                Err(err)
            }
        }
    }
}

/// Whether the database aborted the transaction to preserve serializability.
///
/// Postgres reports a unique violation against a row inserted by a concurrent
/// serializable transaction as a serialization failure instead.
pub fn is_serialization_failure(err: &DbErr) -> bool {
    use std::borrow::Borrow;

    let (DbErr::Conn(runtime) | DbErr::Exec(runtime) | DbErr::Query(runtime)) = err else {
        return false;
    };
    let RuntimeErr::SqlxError(sqlx_err) = runtime else {
        return false;
    };

    let sqlx_err: &SqlxError = sqlx_err.borrow();
    match sqlx_err {
        SqlxError::Database(db_err) => db_err.code().as_deref() == Some(SERIALIZATION_FAILURE),
        _ => false,
    }
}
