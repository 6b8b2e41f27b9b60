use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{__path_dummy_login, dummy_login},
        pickup_point::{
            __path_create_pickup_point, __path_get_pickup_points, create_pickup_point,
            get_pickup_points,
        },
        product::{
            __path_create_product, __path_delete_last_product, create_product,
            delete_last_product,
        },
        reception::{
            __path_close_last_reception, __path_create_reception, close_last_reception,
            create_reception,
        },
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "PVZ Service", description = "Pickup point reception and product lifecycle API"),
    tags(
        (name = "auth", description = "Role-based dummy login"),
        (name = "pvz", description = "Pickup point registration and listing"),
        (name = "reception", description = "Reception lifecycle"),
        (name = "product", description = "Product lifecycle")
    )
)]
struct ApiDoc;

/// Builds the API router with OpenAPI documentation served at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = routes().split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(dummy_login))
        .routes(routes!(create_pickup_point, get_pickup_points))
        .routes(routes!(create_reception))
        .routes(routes!(close_last_reception))
        .routes(routes!(create_product))
        .routes(routes!(delete_last_product))
}
