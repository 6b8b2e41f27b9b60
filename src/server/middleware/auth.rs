use tower_sessions::Session;

use crate::{
    model::auth::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
    },
};

/// Actions an endpoint may require of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Register new pickup points.
    CreatePickupPoint,
    /// List pickup points with their receptions and products.
    ViewPickupPoints,
    /// Open and close receptions, accept and delete products.
    ManageReceptions,
}

impl Permission {
    /// Whether the role holds this permission.
    pub fn granted_to(self, role: Role) -> bool {
        match (self, role) {
            (Permission::CreatePickupPoint, Role::Moderator) => true,
            (Permission::CreatePickupPoint, Role::Employee) => false,
            (Permission::ViewPickupPoints, Role::Moderator | Role::Employee) => true,
            (Permission::ManageReceptions, Role::Employee) => true,
            (Permission::ManageReceptions, Role::Moderator) => false,
        }
    }
}

pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Checks that the session role holds every listed permission.
    ///
    /// # Returns
    /// - `Ok(Role)` - The caller's role
    /// - `Err(AuthError::NotAuthenticated)` - No role in session
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<Role, AppError> {
        let Some(role) = AuthSession::new(self.session).get_role().await? else {
            return Err(AuthError::NotAuthenticated.into());
        };

        if let Some(missing) = permissions.iter().find(|p| !p.granted_to(role)) {
            return Err(AuthError::AccessDenied(
                role,
                format!("Role lacks the {:?} permission", missing),
            )
            .into());
        }

        Ok(role)
    }
}
