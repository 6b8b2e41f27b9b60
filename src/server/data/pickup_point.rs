use chrono::Utc;
use entity::sea_orm_active_enums::City;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::server::model::{
    pickup_point::{PickupPoint, PickupPointData, PickupPointFilter, ReceptionData},
    product::Product,
    reception::Reception,
};

pub struct PickupPointRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PickupPointRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new pickup point in the given city
    pub async fn create(&self, city: City) -> Result<PickupPoint, DbErr> {
        let pickup_point = entity::pickup_point::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            registration_date: ActiveValue::Set(Utc::now()),
            city: ActiveValue::Set(city),
        }
        .insert(self.db)
        .await?;

        Ok(PickupPoint::from_entity(pickup_point))
    }

    /// Gets a page of pickup points with their receptions and products.
    ///
    /// Pickup points are paged in registration order. When the filter carries a
    /// date range, only pickup points with at least one reception in range take
    /// part in paging. Each entry lists its receptions in range by opening time
    /// and each reception lists its products by acceptance time. Pickup points
    /// left without receptions are omitted from the page.
    pub async fn get_paginated_with_receptions(
        &self,
        filter: &PickupPointFilter,
    ) -> Result<Vec<PickupPointData>, DbErr> {
        let in_range = Condition::all()
            .add_option(
                filter
                    .start_date
                    .map(|start| entity::receiving::Column::ReceivingDatetime.gte(start)),
            )
            .add_option(
                filter
                    .end_date
                    .map(|end| entity::receiving::Column::ReceivingDatetime.lte(end)),
            );

        let mut query = entity::prelude::PickupPoint::find()
            .order_by_asc(entity::pickup_point::Column::RegistrationDate)
            .order_by_asc(entity::pickup_point::Column::Id);

        if filter.has_date_range() {
            query = query.filter(
                entity::pickup_point::Column::Id.in_subquery(
                    entity::prelude::Receiving::find()
                        .select_only()
                        .column(entity::receiving::Column::PickupPointId)
                        .filter(in_range.clone())
                        .into_query(),
                ),
            );
        }

        // Paginator pages are 0-indexed
        let pickup_points = query
            .paginate(self.db, filter.limit)
            .fetch_page(filter.page - 1)
            .await?;

        if pickup_points.is_empty() {
            return Ok(Vec::new());
        }

        let pickup_point_ids: Vec<Uuid> = pickup_points.iter().map(|p| p.id).collect();

        let receptions = entity::prelude::Receiving::find()
            .filter(entity::receiving::Column::PickupPointId.is_in(pickup_point_ids))
            .filter(in_range)
            .order_by_asc(entity::receiving::Column::ReceivingDatetime)
            .order_by_asc(entity::receiving::Column::Seq)
            .all(self.db)
            .await?;

        let reception_ids: Vec<Uuid> = receptions.iter().map(|r| r.id).collect();

        let products = if reception_ids.is_empty() {
            Vec::new()
        } else {
            entity::prelude::Goods::find()
                .filter(entity::goods::Column::ReceivingId.is_in(reception_ids))
                .order_by_asc(entity::goods::Column::AcceptedDatetime)
                .order_by_asc(entity::goods::Column::Seq)
                .all(self.db)
                .await?
        };

        // Group products by reception, preserving acceptance order
        let mut products_by_reception: HashMap<Uuid, Vec<Product>> = HashMap::new();
        for product in products {
            products_by_reception
                .entry(product.receiving_id)
                .or_default()
                .push(Product::from_entity(product));
        }

        // Group receptions by pickup point, preserving opening order
        let mut receptions_by_pickup_point: HashMap<Uuid, Vec<ReceptionData>> = HashMap::new();
        for reception in receptions {
            let products = products_by_reception
                .remove(&reception.id)
                .unwrap_or_default();

            receptions_by_pickup_point
                .entry(reception.pickup_point_id)
                .or_default()
                .push(ReceptionData {
                    reception: Reception::from_entity(reception),
                    products,
                });
        }

        let data = pickup_points
            .into_iter()
            .filter_map(|pickup_point| {
                let receptions = receptions_by_pickup_point.remove(&pickup_point.id)?;

                Some(PickupPointData {
                    pickup_point: PickupPoint::from_entity(pickup_point),
                    receptions,
                })
            })
            .collect();

        Ok(data)
    }
}
