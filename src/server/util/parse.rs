use uuid::Uuid;

use crate::server::error::AppError;

/// Parses a pickup point ID from a path segment
///
/// # Arguments
/// - `value` - The path segment to attempt to parse as a UUID
///
/// # Returns
/// - `Ok(Uuid)` - Successfully parsed the identifier
/// - `Err(AppError::BadRequest)` - The segment is not a valid UUID
pub fn parse_pickup_point_id(value: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value)
        .map_err(|_| AppError::BadRequest(format!("Invalid pickup point id '{}'", value)))
}
