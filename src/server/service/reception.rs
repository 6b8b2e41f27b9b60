use sea_orm::DatabaseConnection;
use std::time::Duration;
use uuid::Uuid;

use crate::server::{
    data::reception::ReceptionRepository, error::AppError, model::reception::Reception,
    util::deadline::with_deadline,
};

pub struct ReceptionService<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
}

impl<'a> ReceptionService<'a> {
    pub fn new(db: &'a DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    /// Opens a new reception at the pickup point
    pub async fn open(&self, pickup_point_id: Uuid) -> Result<Reception, AppError> {
        let repo = ReceptionRepository::new(self.db);

        let reception =
            with_deadline(self.timeout, "open_reception", repo.open(pickup_point_id)).await?;

        tracing::debug!(
            "Opened reception {} at pickup point {}",
            reception.id,
            pickup_point_id
        );

        Ok(Reception::from_entity(reception))
    }

    /// Closes the reception in progress at the pickup point
    pub async fn close_last(&self, pickup_point_id: Uuid) -> Result<Reception, AppError> {
        let repo = ReceptionRepository::new(self.db);

        let reception = with_deadline(
            self.timeout,
            "close_last_reception",
            repo.close_last(pickup_point_id),
        )
        .await?;

        tracing::debug!(
            "Closed reception {} at pickup point {}",
            reception.id,
            pickup_point_id
        );

        Ok(Reception::from_entity(reception))
    }
}
