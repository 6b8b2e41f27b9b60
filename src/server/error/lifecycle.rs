//! Failures of the reception and product lifecycle operations.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// Outcome of a rejected or failed lifecycle transaction.
///
/// Every variant is returned only after the transaction has been rolled back.
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// A reception is already in progress at the pickup point.
    ///
    /// Not retried automatically; a retry from the caller is a new attempt.
    #[error("Pickup point {pickup_point_id} already has a reception in progress")]
    Conflict { pickup_point_id: Uuid },

    /// The pickup point has no reception in progress.
    #[error("No reception in progress for pickup point {pickup_point_id}")]
    NoActiveReception { pickup_point_id: Uuid },

    /// The in-progress reception holds no products to remove.
    #[error("Reception {reception_id} has no products to delete")]
    EmptyReception { reception_id: Uuid },

    /// The pickup point does not exist.
    #[error("Pickup point {0} not found")]
    PickupPointNotFound(Uuid),

    /// Connection loss, serialization abort, constraint violation or any other
    /// database failure not classified above.
    #[error("Lifecycle transaction failed: {0}")]
    Persistence(#[from] sea_orm::DbErr),
}

/// Converts lifecycle errors into HTTP responses.
///
/// - `Conflict` → 409 Conflict
/// - `NoActiveReception` / `EmptyReception` → 400 Bad Request
/// - `PickupPointNotFound` → 404 Not Found
/// - `Persistence` → 500 Internal Server Error with a generic message
///
/// Business-rule violations carry their message to the client.
impl IntoResponse for LifecycleError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::NoActiveReception { .. } | Self::EmptyReception { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::PickupPointNotFound(_) => StatusCode::NOT_FOUND,
            Self::Persistence(_) => return InternalServerError(self).into_response(),
        };

        tracing::warn!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
