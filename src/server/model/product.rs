//! Product domain model.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ProductType;
use uuid::Uuid;

use crate::model::product::{ProductDto, ProductTypeDto};

/// A single item accepted within a reception.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    /// When the product was accepted.
    pub date_time: DateTime<Utc>,
    pub product_type: ProductType,
    pub reception_id: Uuid,
}

impl Product {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::goods::Model) -> Self {
        Self {
            id: entity.id,
            date_time: entity.accepted_datetime,
            product_type: entity.product_type,
            reception_id: entity.receiving_id,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            date_time: self.date_time,
            product_type: self.product_type.into(),
            reception_id: self.reception_id,
        }
    }
}

impl From<ProductType> for ProductTypeDto {
    fn from(product_type: ProductType) -> Self {
        match product_type {
            ProductType::Electronics => Self::Electronics,
            ProductType::Clothes => Self::Clothes,
            ProductType::Shoes => Self::Shoes,
        }
    }
}

impl From<ProductTypeDto> for ProductType {
    fn from(product_type: ProductTypeDto) -> Self {
        match product_type {
            ProductTypeDto::Electronics => Self::Electronics,
            ProductTypeDto::Clothes => Self::Clothes,
            ProductTypeDto::Shoes => Self::Shoes,
        }
    }
}
