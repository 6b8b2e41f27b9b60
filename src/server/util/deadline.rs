use std::{future::Future, time::Duration};

use crate::server::error::AppError;

/// Runs `operation` with an upper bound on its duration.
///
/// On expiry the future is dropped before it completes. For lifecycle operations
/// that drops the open transaction, which the driver rolls back.
///
/// # Arguments
/// - `timeout` - Deadline for the whole operation, waiting for locks included
/// - `operation_name` - Name reported in the log and in the error
/// - `operation` - The work to bound
///
/// # Returns
/// - `Ok(T)` / `Err(E)` - The operation finished in time
/// - `Err(AppError::DeadlineExceeded)` - The deadline passed first
pub async fn with_deadline<T, E, F>(
    timeout: Duration,
    operation_name: &'static str,
    operation: F,
) -> Result<T, AppError>
where
    F: Future<Output = Result<T, E>>,
    E: Into<AppError>,
{
    match tokio::time::timeout(timeout, operation).await {
        Ok(result) => result.map_err(Into::into),
        Err(_) => {
            tracing::warn!(
                "'{}' exceeded its {}ms deadline",
                operation_name,
                timeout.as_millis()
            );
            Err(AppError::DeadlineExceeded(operation_name))
        }
    }
}
