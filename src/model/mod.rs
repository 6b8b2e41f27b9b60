//! Wire-level DTOs shared by the HTTP API and its OpenAPI documentation.

pub mod api;
pub mod auth;
pub mod pickup_point;
pub mod product;
pub mod reception;
