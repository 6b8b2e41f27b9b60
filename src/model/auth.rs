use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role of the caller, fixed at login and stored in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Pickup point staff: opens and closes receptions, accepts and removes goods.
    Employee,
    /// Registers pickup points.
    Moderator,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DummyLoginDto {
    pub role: Role,
}
