//! Pickup point domain models and listing parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::City;
use uuid::Uuid;

use crate::{
    model::pickup_point::{
        CityDto, PickupPointDataDto, PickupPointDto, PickupPointQueryDto, ReceptionDataDto,
    },
    server::{
        error::AppError,
        model::{product::Product, reception::Reception},
    },
};

/// Largest page a listing request may ask for.
pub const MAX_PAGE_LIMIT: u64 = 30;
const DEFAULT_PAGE_LIMIT: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct PickupPoint {
    pub id: Uuid,
    pub registration_date: DateTime<Utc>,
    pub city: City,
}

impl PickupPoint {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::pickup_point::Model) -> Self {
        Self {
            id: entity.id,
            registration_date: entity.registration_date,
            city: entity.city,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> PickupPointDto {
        PickupPointDto {
            id: self.id,
            registration_date: self.registration_date,
            city: self.city.into(),
        }
    }
}

/// A reception together with the products accepted in it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceptionData {
    pub reception: Reception,
    /// Products in acceptance order.
    pub products: Vec<Product>,
}

impl ReceptionData {
    pub fn into_dto(self) -> ReceptionDataDto {
        ReceptionDataDto {
            reception: self.reception.into_dto(),
            products: self.products.into_iter().map(Product::into_dto).collect(),
        }
    }
}

/// One entry of the pickup point listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PickupPointData {
    pub pickup_point: PickupPoint,
    /// Receptions in opening order. Never empty.
    pub receptions: Vec<ReceptionData>,
}

impl PickupPointData {
    pub fn into_dto(self) -> PickupPointDataDto {
        PickupPointDataDto {
            pvz: self.pickup_point.into_dto(),
            receptions: self
                .receptions
                .into_iter()
                .map(ReceptionData::into_dto)
                .collect(),
        }
    }
}

/// Validated parameters of the pickup point listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PickupPointFilter {
    /// Inclusive lower bound on reception opening time.
    pub start_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on reception opening time.
    pub end_date: Option<DateTime<Utc>>,
    /// 1-indexed page number.
    pub page: u64,
    pub limit: u64,
}

impl PickupPointFilter {
    /// Validates the query string and applies defaults.
    ///
    /// # Returns
    /// - `Ok(PickupPointFilter)` - Page at least 1, limit within 1 to 30
    /// - `Err(AppError::BadRequest)` - Out of range page, limit or date range
    pub fn from_query(query: PickupPointQueryDto) -> Result<Self, AppError> {
        let page = query.page.unwrap_or(1);
        if page == 0 {
            return Err(AppError::BadRequest("page must be at least 1".to_string()));
        }

        let limit = query.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
            return Err(AppError::BadRequest(format!(
                "limit must be between 1 and {}",
                MAX_PAGE_LIMIT
            )));
        }

        if let (Some(start), Some(end)) = (query.start_date, query.end_date) {
            if start > end {
                return Err(AppError::BadRequest(
                    "startDate must not be after endDate".to_string(),
                ));
            }
        }

        Ok(Self {
            start_date: query.start_date,
            end_date: query.end_date,
            page,
            limit,
        })
    }

    pub fn has_date_range(&self) -> bool {
        self.start_date.is_some() || self.end_date.is_some()
    }
}

impl From<City> for CityDto {
    fn from(city: City) -> Self {
        match city {
            City::Moscow => Self::Moscow,
            City::SaintPetersburg => Self::SaintPetersburg,
            City::Kazan => Self::Kazan,
        }
    }
}

impl From<CityDto> for City {
    fn from(city: CityDto) -> Self {
        match city {
            CityDto::Moscow => Self::Moscow,
            CityDto::SaintPetersburg => Self::SaintPetersburg,
            CityDto::Kazan => Self::Kazan,
        }
    }
}
