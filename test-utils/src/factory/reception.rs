//! Reception factory for creating test receiving entities.
//!
//! Inserts rows directly, bypassing the lifecycle rules. Use it to arrange
//! state (like closed history) that the repositories would never produce in
//! a single step.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ReceptionStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

pub struct ReceptionFactory<'a> {
    db: &'a DatabaseConnection,
    pickup_point_id: Uuid,
    status: ReceptionStatus,
    receiving_datetime: DateTime<Utc>,
    seq: Option<i64>,
}

impl<'a> ReceptionFactory<'a> {
    /// Creates a new ReceptionFactory with default values.
    ///
    /// Defaults:
    /// - status: `ReceptionStatus::InProgress`
    /// - receiving_datetime: now
    /// - seq: assigned by the database
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `pickup_point_id` - Pickup point that owns the reception
    pub fn new(db: &'a DatabaseConnection, pickup_point_id: Uuid) -> Self {
        Self {
            db,
            pickup_point_id,
            status: ReceptionStatus::InProgress,
            receiving_datetime: Utc::now(),
            seq: None,
        }
    }

    pub fn status(mut self, status: ReceptionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn receiving_datetime(mut self, receiving_datetime: DateTime<Utc>) -> Self {
        self.receiving_datetime = receiving_datetime;
        self
    }

    pub fn seq(mut self, seq: i64) -> Self {
        self.seq = Some(seq);
        self
    }

    /// Builds and inserts the reception entity into the database.
    pub async fn build(self) -> Result<entity::receiving::Model, DbErr> {
        entity::receiving::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            receiving_datetime: ActiveValue::Set(self.receiving_datetime),
            pickup_point_id: ActiveValue::Set(self.pickup_point_id),
            status: ActiveValue::Set(self.status),
            seq: self.seq.map_or(ActiveValue::NotSet, ActiveValue::Set),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an in-progress reception for the pickup point.
pub async fn create_reception(
    db: &DatabaseConnection,
    pickup_point_id: Uuid,
) -> Result<entity::receiving::Model, DbErr> {
    ReceptionFactory::new(db, pickup_point_id).build().await
}

/// Creates a closed reception for the pickup point.
pub async fn create_closed_reception(
    db: &DatabaseConnection,
    pickup_point_id: Uuid,
) -> Result<entity::receiving::Model, DbErr> {
    ReceptionFactory::new(db, pickup_point_id)
        .status(ReceptionStatus::Closed)
        .build()
        .await
}
