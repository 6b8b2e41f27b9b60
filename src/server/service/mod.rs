//! Service layer for business logic and orchestration.
//!
//! This module sits between the controller (API) layer and the data (repository)
//! layer. Services are responsible for:
//!
//! - **Deadlines**: Bounding every lifecycle operation by the configured timeout
//! - **Domain Models**: Converting repository results into domain models
//! - **Logging**: Recording each committed lifecycle transition

pub mod pickup_point;
pub mod product;
pub mod reception;
