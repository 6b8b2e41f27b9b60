//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Creates a pickup point with an in-progress reception.
///
/// # Returns
/// - `Ok((pickup_point, reception))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_open_reception(
    db: &DatabaseConnection,
) -> Result<(entity::pickup_point::Model, entity::receiving::Model), DbErr> {
    let pickup_point = crate::factory::pickup_point::create_pickup_point(db).await?;
    let reception = crate::factory::reception::create_reception(db, pickup_point.id).await?;

    Ok((pickup_point, reception))
}
