//! Reception domain model.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ReceptionStatus;
use uuid::Uuid;

use crate::model::reception::{ReceptionDto, ReceptionStatusDto};

/// A goods-receiving session at a pickup point.
#[derive(Debug, Clone, PartialEq)]
pub struct Reception {
    pub id: Uuid,
    /// When the reception was opened.
    pub date_time: DateTime<Utc>,
    pub pickup_point_id: Uuid,
    pub status: ReceptionStatus,
}

impl Reception {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::receiving::Model) -> Self {
        Self {
            id: entity.id,
            date_time: entity.receiving_datetime,
            pickup_point_id: entity.pickup_point_id,
            status: entity.status,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> ReceptionDto {
        ReceptionDto {
            id: self.id,
            date_time: self.date_time,
            pvz_id: self.pickup_point_id,
            status: self.status.into(),
        }
    }
}

impl From<ReceptionStatus> for ReceptionStatusDto {
    fn from(status: ReceptionStatus) -> Self {
        match status {
            ReceptionStatus::InProgress => Self::InProgress,
            ReceptionStatus::Closed => Self::Closed,
        }
    }
}
