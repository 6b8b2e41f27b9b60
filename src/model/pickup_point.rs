use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::model::{product::ProductDto, reception::ReceptionDto};

/// City a pickup point operates in.
///
/// The Russian names are accepted on input for compatibility with existing clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CityDto {
    #[serde(alias = "Москва")]
    Moscow,
    #[serde(rename = "Saint Petersburg", alias = "Санкт-Петербург")]
    SaintPetersburg,
    #[serde(alias = "Казань")]
    Kazan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatePickupPointDto {
    pub city: CityDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PickupPointDto {
    pub id: Uuid,
    pub registration_date: DateTime<Utc>,
    pub city: CityDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReceptionDataDto {
    pub reception: ReceptionDto,
    pub products: Vec<ProductDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PickupPointDataDto {
    pub pvz: PickupPointDto,
    pub receptions: Vec<ReceptionDataDto>,
}

/// Query string of the pickup point listing.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PickupPointQueryDto {
    /// Only receptions opened at or after this instant (RFC 3339).
    pub start_date: Option<DateTime<Utc>>,
    /// Only receptions opened at or before this instant (RFC 3339).
    pub end_date: Option<DateTime<Utc>>,
    /// Page number starting at 1 (default: 1).
    pub page: Option<u64>,
    /// Items per page, 1 to 30 (default: 10).
    pub limit: Option<u64>,
}
