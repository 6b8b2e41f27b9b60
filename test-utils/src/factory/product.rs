//! Product factory for creating test goods entities.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ProductType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    receiving_id: Uuid,
    product_type: ProductType,
    accepted_datetime: DateTime<Utc>,
    seq: Option<i64>,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values.
    ///
    /// Defaults:
    /// - product_type: `ProductType::Electronics`
    /// - accepted_datetime: now
    /// - seq: assigned by the database
    pub fn new(db: &'a DatabaseConnection, receiving_id: Uuid) -> Self {
        Self {
            db,
            receiving_id,
            product_type: ProductType::Electronics,
            accepted_datetime: Utc::now(),
            seq: None,
        }
    }

    pub fn product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = product_type;
        self
    }

    pub fn accepted_datetime(mut self, accepted_datetime: DateTime<Utc>) -> Self {
        self.accepted_datetime = accepted_datetime;
        self
    }

    pub fn seq(mut self, seq: i64) -> Self {
        self.seq = Some(seq);
        self
    }

    /// Builds and inserts the product entity into the database.
    pub async fn build(self) -> Result<entity::goods::Model, DbErr> {
        entity::goods::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            accepted_datetime: ActiveValue::Set(self.accepted_datetime),
            product_type: ActiveValue::Set(self.product_type),
            receiving_id: ActiveValue::Set(self.receiving_id),
            seq: self.seq.map_or(ActiveValue::NotSet, ActiveValue::Set),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an electronics product in the reception.
pub async fn create_product(
    db: &DatabaseConnection,
    receiving_id: Uuid,
) -> Result<entity::goods::Model, DbErr> {
    ProductFactory::new(db, receiving_id).build().await
}
