use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        product::{CreateProductDto, ProductDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::product::ProductService,
        state::AppState,
        util::parse::parse_pickup_point_id,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

/// Accept a product into the reception in progress.
///
/// # Access Control
/// - `ManageReceptions` - Employees only
///
/// # Returns
/// - `201 Created` - The accepted product
/// - `400 Bad Request` - No reception in progress
/// - `401 Unauthorized` - Caller not logged in
/// - `403 Forbidden` - Caller is not an employee
/// - `504 Gateway Timeout` - Operation deadline exceeded
#[utoipa::path(
    post,
    path = "/products",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product accepted", body = ProductDto),
        (status = 400, description = "No reception in progress", body = ErrorDto),
        (status = 401, description = "Caller not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an employee", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 504, description = "Operation deadline exceeded", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require(&[Permission::ManageReceptions])
        .await?;

    let service = ProductService::new(&state.db, state.operation_timeout);

    let product = service
        .add(payload.pvz_id, payload.product_type.into())
        .await?;

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

/// Delete the last product accepted into the reception in progress.
///
/// # Access Control
/// - `ManageReceptions` - Employees only
///
/// # Returns
/// - `200 OK` - Product deleted
/// - `400 Bad Request` - Invalid id, no reception in progress or reception empty
/// - `401 Unauthorized` - Caller not logged in
/// - `403 Forbidden` - Caller is not an employee
/// - `504 Gateway Timeout` - Operation deadline exceeded
#[utoipa::path(
    post,
    path = "/pvz/{pvzId}/delete_last_product",
    tag = PRODUCT_TAG,
    params(
        ("pvzId" = String, Path, description = "Pickup point ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageDto),
        (status = 400, description = "Invalid id, no reception in progress or reception empty", body = ErrorDto),
        (status = 401, description = "Caller not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an employee", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 504, description = "Operation deadline exceeded", body = ErrorDto)
    ),
)]
pub async fn delete_last_product(
    State(state): State<AppState>,
    session: Session,
    Path(pvz_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require(&[Permission::ManageReceptions])
        .await?;

    let pickup_point_id = parse_pickup_point_id(&pvz_id)?;

    let service = ProductService::new(&state.db, state.operation_timeout);

    service.remove_last(pickup_point_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            description: "Product deleted".to_string(),
        }),
    ))
}
