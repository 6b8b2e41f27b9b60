use entity::sea_orm_active_enums::ProductType;
use sea_orm::DatabaseConnection;
use std::time::Duration;
use uuid::Uuid;

use crate::server::{
    data::product::ProductRepository, error::AppError, model::product::Product,
    util::deadline::with_deadline,
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    /// Accepts a product into the reception in progress at the pickup point
    pub async fn add(
        &self,
        pickup_point_id: Uuid,
        product_type: ProductType,
    ) -> Result<Product, AppError> {
        let repo = ProductRepository::new(self.db);

        let product = with_deadline(
            self.timeout,
            "add_product",
            repo.add(pickup_point_id, product_type),
        )
        .await?;

        tracing::debug!(
            "Accepted {:?} product {} into reception {}",
            product.product_type,
            product.id,
            product.receiving_id
        );

        Ok(Product::from_entity(product))
    }

    /// Deletes the most recently accepted product of the reception in progress
    pub async fn remove_last(&self, pickup_point_id: Uuid) -> Result<(), AppError> {
        let repo = ProductRepository::new(self.db);

        let product = with_deadline(
            self.timeout,
            "delete_last_product",
            repo.remove_last(pickup_point_id),
        )
        .await?;

        tracing::debug!(
            "Deleted product {} from reception {}",
            product.id,
            product.receiving_id
        );

        Ok(())
    }
}
