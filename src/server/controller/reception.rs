use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        reception::{CreateReceptionDto, ReceptionDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::reception::ReceptionService,
        state::AppState,
        util::parse::parse_pickup_point_id,
    },
};

/// Tag for grouping reception endpoints in OpenAPI documentation
pub static RECEPTION_TAG: &str = "reception";

/// Open a reception at a pickup point.
///
/// # Access Control
/// - `ManageReceptions` - Employees only
///
/// # Returns
/// - `201 Created` - The new reception, `in_progress`
/// - `401 Unauthorized` - Caller not logged in
/// - `403 Forbidden` - Caller is not an employee
/// - `404 Not Found` - Pickup point does not exist
/// - `409 Conflict` - A reception is already in progress
/// - `504 Gateway Timeout` - Operation deadline exceeded
#[utoipa::path(
    post,
    path = "/receptions",
    tag = RECEPTION_TAG,
    request_body = CreateReceptionDto,
    responses(
        (status = 201, description = "Reception opened", body = ReceptionDto),
        (status = 401, description = "Caller not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an employee", body = ErrorDto),
        (status = 404, description = "Pickup point not found", body = ErrorDto),
        (status = 409, description = "A reception is already in progress", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 504, description = "Operation deadline exceeded", body = ErrorDto)
    ),
)]
pub async fn create_reception(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReceptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require(&[Permission::ManageReceptions])
        .await?;

    let service = ReceptionService::new(&state.db, state.operation_timeout);

    let reception = service.open(payload.pvz_id).await?;

    Ok((StatusCode::CREATED, Json(reception.into_dto())))
}

/// Close the reception in progress at a pickup point.
///
/// # Access Control
/// - `ManageReceptions` - Employees only
///
/// # Returns
/// - `200 OK` - The reception, now `closed`
/// - `400 Bad Request` - Invalid id or no reception in progress
/// - `401 Unauthorized` - Caller not logged in
/// - `403 Forbidden` - Caller is not an employee
/// - `504 Gateway Timeout` - Operation deadline exceeded
#[utoipa::path(
    post,
    path = "/pvz/{pvzId}/close_last_reception",
    tag = RECEPTION_TAG,
    params(
        ("pvzId" = String, Path, description = "Pickup point ID")
    ),
    responses(
        (status = 200, description = "Reception closed", body = ReceptionDto),
        (status = 400, description = "Invalid id or no reception in progress", body = ErrorDto),
        (status = 401, description = "Caller not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an employee", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 504, description = "Operation deadline exceeded", body = ErrorDto)
    ),
)]
pub async fn close_last_reception(
    State(state): State<AppState>,
    session: Session,
    Path(pvz_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require(&[Permission::ManageReceptions])
        .await?;

    let pickup_point_id = parse_pickup_point_id(&pvz_id)?;

    let service = ReceptionService::new(&state.db, state.operation_timeout);

    let reception = service.close_last(pickup_point_id).await?;

    Ok((StatusCode::OK, Json(reception.into_dto())))
}
