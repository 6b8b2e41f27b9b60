use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, auth::Role};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No role is stored in the session.
    ///
    /// The caller never logged in or the session expired. Results in a 401
    /// Unauthorized response.
    #[error("No authenticated role in session")]
    NotAuthenticated,

    /// The session role lacks the permission required by the endpoint.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - Role stored in the session
    /// - Description of the denied action
    #[error("Role {0:?} denied access: {1}")]
    AccessDenied(Role, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `NotAuthenticated` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// Denials are logged at debug level while the client-facing message stays short.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Access denied".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
