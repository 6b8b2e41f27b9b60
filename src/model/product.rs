use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Product category accepted at a pickup point.
///
/// The Russian names are accepted on input for compatibility with existing clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProductTypeDto {
    #[serde(alias = "электроника")]
    Electronics,
    #[serde(alias = "одежда")]
    Clothes,
    #[serde(alias = "обувь")]
    Shoes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    #[serde(rename = "type")]
    pub product_type: ProductTypeDto,
    pub pvz_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: Uuid,
    pub date_time: DateTime<Utc>,
    #[serde(rename = "type")]
    pub product_type: ProductTypeDto,
    pub reception_id: Uuid,
}
