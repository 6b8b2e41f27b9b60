use chrono::Utc;
use entity::sea_orm_active_enums::ProductType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, ModelTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::{
    data::{reception::ReceptionRepository, unit_of_work::UnitOfWork},
    error::lifecycle::LifecycleError,
};

/// Product lifecycle engine.
///
/// Products only ever change inside the pickup point's in-progress reception,
/// which is locked before the products are read or written.
pub struct ProductRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    async fn lock_in_progress_reception(
        &self,
        pickup_point_id: Uuid,
    ) -> Result<entity::receiving::Model, LifecycleError> {
        ReceptionRepository::new(self.db)
            .find_in_progress_for_update(pickup_point_id)
            .await?
            .ok_or(LifecycleError::NoActiveReception { pickup_point_id })
    }

    /// Reads the most recently accepted product of a reception with `FOR UPDATE`.
    pub async fn find_last_for_update(
        &self,
        receiving_id: Uuid,
    ) -> Result<Option<entity::goods::Model>, DbErr> {
        entity::prelude::Goods::find()
            .filter(entity::goods::Column::ReceivingId.eq(receiving_id))
            .order_by_desc(entity::goods::Column::AcceptedDatetime)
            .order_by_desc(entity::goods::Column::Seq)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Accepts a product into the in-progress reception on the current connection.
    ///
    /// Reads nothing but the locked reception, so concurrent Adds queue on the
    /// lock instead of aborting. The database assigns `seq`.
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored product
    /// - `Err(LifecycleError::NoActiveReception)` - Nothing is in progress
    /// - `Err(LifecycleError::Persistence)` - Database failure
    pub async fn add_within(
        &self,
        pickup_point_id: Uuid,
        product_type: ProductType,
    ) -> Result<entity::goods::Model, LifecycleError> {
        let reception = self.lock_in_progress_reception(pickup_point_id).await?;

        let product = entity::goods::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            accepted_datetime: ActiveValue::Set(Utc::now()),
            product_type: ActiveValue::Set(product_type),
            receiving_id: ActiveValue::Set(reception.id),
            seq: ActiveValue::NotSet,
        }
        .insert(self.db)
        .await?;

        Ok(product)
    }

    /// Deletes the last accepted product of the in-progress reception on the
    /// current connection.
    ///
    /// # Returns
    /// - `Ok(Model)` - The product that was deleted
    /// - `Err(LifecycleError::NoActiveReception)` - Nothing is in progress
    /// - `Err(LifecycleError::EmptyReception)` - The reception has no products
    /// - `Err(LifecycleError::Persistence)` - Database failure
    pub async fn remove_last_within(
        &self,
        pickup_point_id: Uuid,
    ) -> Result<entity::goods::Model, LifecycleError> {
        let reception = self.lock_in_progress_reception(pickup_point_id).await?;

        let Some(product) = self.find_last_for_update(reception.id).await? else {
            return Err(LifecycleError::EmptyReception {
                reception_id: reception.id,
            });
        };

        product.clone().delete(self.db).await?;

        Ok(product)
    }
}

impl<'a> ProductRepository<'a> {
    /// Adds a product to the pickup point's in-progress reception in its own transaction.
    pub async fn add(
        &self,
        pickup_point_id: Uuid,
        product_type: ProductType,
    ) -> Result<entity::goods::Model, LifecycleError> {
        let uow = UnitOfWork::begin(self.db).await?;
        let result = ProductRepository::new(uow.transaction())
            .add_within(pickup_point_id, product_type)
            .await;

        uow.finish(result).await
    }

    /// Removes the last product of the in-progress reception in its own transaction.
    pub async fn remove_last(
        &self,
        pickup_point_id: Uuid,
    ) -> Result<entity::goods::Model, LifecycleError> {
        let uow = UnitOfWork::begin(self.db).await?;
        let result = ProductRepository::new(uow.transaction())
            .remove_last_within(pickup_point_id)
            .await;

        uow.finish(result).await
    }
}
