//! Type-safe session management wrappers.
//!
//! The session stores nothing but the caller's role, written by the dummy login
//! endpoint and read by `AuthGuard` on every protected request.

use tower_sessions::Session;

use crate::{model::auth::Role, server::error::AppError};

// Session key constants
const SESSION_AUTH_ROLE: &str = "auth:role";

/// Authentication session management.
///
/// Handles storing and retrieving the role the caller logged in with.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the caller's role in the session.
    ///
    /// The session ID is cycled first so a role change never reuses an
    /// identifier issued before login.
    ///
    /// # Arguments
    /// - `role` - Role granted to the caller
    ///
    /// # Returns
    /// - `Ok(())` - Role successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_role(&self, role: Role) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_ROLE, role).await?;
        Ok(())
    }

    /// Retrieves the caller's role from the session.
    ///
    /// # Returns
    /// - `Ok(Some(role))` - Caller is logged in
    /// - `Ok(None)` - No role in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_role(&self) -> Result<Option<Role>, AppError> {
        Ok(self.session.get::<Role>(SESSION_AUTH_ROLE).await?)
    }
}
