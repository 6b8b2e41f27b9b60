use axum::{http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, auth::DummyLoginDto},
    server::{error::AppError, middleware::session::AuthSession},
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with a chosen role.
///
/// Stores the requested role in the caller's session without any credential
/// check. Every other endpoint authorizes against this role.
///
/// # Arguments
/// - `session` - Caller's session to store the role in
/// - `payload` - Role to log in as
///
/// # Returns
/// - `200 OK` - Role stored, echoed back
/// - `500 Internal Server Error` - Session store error
#[utoipa::path(
    post,
    path = "/dummyLogin",
    tag = AUTH_TAG,
    request_body = DummyLoginDto,
    responses(
        (status = 200, description = "Logged in with the requested role", body = DummyLoginDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn dummy_login(
    session: Session,
    Json(payload): Json<DummyLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).set_role(payload.role).await?;

    tracing::debug!("Dummy login as {:?}", payload.role);

    Ok((StatusCode::OK, Json(payload)))
}
