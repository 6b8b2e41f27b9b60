use entity::sea_orm_active_enums::City;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::pickup_point::PickupPointRepository,
    error::AppError,
    model::pickup_point::{PickupPoint, PickupPointData, PickupPointFilter},
};

pub struct PickupPointService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PickupPointService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new pickup point
    pub async fn create(&self, city: City) -> Result<PickupPoint, AppError> {
        let repo = PickupPointRepository::new(self.db);

        let pickup_point = repo.create(city).await?;

        tracing::info!(
            "Registered pickup point {} in {:?}",
            pickup_point.id,
            pickup_point.city
        );

        Ok(pickup_point)
    }

    /// Gets a page of pickup points with their receptions and products
    pub async fn get_paginated(
        &self,
        filter: &PickupPointFilter,
    ) -> Result<Vec<PickupPointData>, AppError> {
        let repo = PickupPointRepository::new(self.db);

        Ok(repo.get_paginated_with_receptions(filter).await?)
    }
}
