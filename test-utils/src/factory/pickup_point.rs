//! Pickup point factory for creating test pickup point entities.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::City;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test pickup points with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let pickup_point = PickupPointFactory::new(&db)
///     .city(City::Kazan)
///     .build()
///     .await?;
/// ```
pub struct PickupPointFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    city: City,
    registration_date: DateTime<Utc>,
}

impl<'a> PickupPointFactory<'a> {
    /// Creates a new PickupPointFactory with default values.
    ///
    /// Defaults:
    /// - id: random v4 UUID
    /// - city: `City::Moscow`
    /// - registration_date: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: Uuid::new_v4(),
            city: City::Moscow,
            registration_date: Utc::now(),
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn city(mut self, city: City) -> Self {
        self.city = city;
        self
    }

    pub fn registration_date(mut self, registration_date: DateTime<Utc>) -> Self {
        self.registration_date = registration_date;
        self
    }

    /// Builds and inserts the pickup point entity into the database.
    pub async fn build(self) -> Result<entity::pickup_point::Model, DbErr> {
        entity::pickup_point::ActiveModel {
            id: ActiveValue::Set(self.id),
            city: ActiveValue::Set(self.city),
            registration_date: ActiveValue::Set(self.registration_date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pickup point with default values.
pub async fn create_pickup_point(
    db: &DatabaseConnection,
) -> Result<entity::pickup_point::Model, DbErr> {
    PickupPointFactory::new(db).build().await
}
