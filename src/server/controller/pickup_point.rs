use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        pickup_point::{
            CreatePickupPointDto, PickupPointDataDto, PickupPointDto, PickupPointQueryDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::pickup_point::{PickupPointData, PickupPointFilter},
        service::pickup_point::PickupPointService,
        state::AppState,
    },
};

/// Tag for grouping pickup point endpoints in OpenAPI documentation
pub static PICKUP_POINT_TAG: &str = "pvz";

/// Register a new pickup point.
///
/// # Access Control
/// - `CreatePickupPoint` - Moderators only
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Caller's session for authorization
/// - `payload` - City of the new pickup point
///
/// # Returns
/// - `201 Created` - The registered pickup point
/// - `401 Unauthorized` - Caller not logged in
/// - `403 Forbidden` - Caller is not a moderator
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/pvz",
    tag = PICKUP_POINT_TAG,
    request_body = CreatePickupPointDto,
    responses(
        (status = 201, description = "Pickup point registered", body = PickupPointDto),
        (status = 401, description = "Caller not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a moderator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pickup_point(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePickupPointDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require(&[Permission::CreatePickupPoint])
        .await?;

    let service = PickupPointService::new(&state.db);

    let pickup_point = service.create(payload.city.into()).await?;

    Ok((StatusCode::CREATED, Json(pickup_point.into_dto())))
}

/// List pickup points with their receptions and products.
///
/// Optionally restricted to receptions opened within a date range. Pickup
/// points without a matching reception are left out.
///
/// # Access Control
/// - `ViewPickupPoints` - Employees and moderators
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Caller's session for authorization
/// - `query` - Date range and paging
///
/// # Returns
/// - `200 OK` - Page of pickup points
/// - `400 Bad Request` - Invalid paging or date range
/// - `401 Unauthorized` - Caller not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/pvz",
    tag = PICKUP_POINT_TAG,
    params(PickupPointQueryDto),
    responses(
        (status = 200, description = "Page of pickup points", body = Vec<PickupPointDataDto>),
        (status = 400, description = "Invalid paging or date range", body = ErrorDto),
        (status = 401, description = "Caller not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pickup_points(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PickupPointQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require(&[Permission::ViewPickupPoints])
        .await?;

    let filter = PickupPointFilter::from_query(query)?;

    let service = PickupPointService::new(&state.db);

    let pickup_points = service.get_paginated(&filter).await?;

    let dtos: Vec<PickupPointDataDto> = pickup_points
        .into_iter()
        .map(PickupPointData::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}
