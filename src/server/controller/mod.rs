//! HTTP request handlers.
//!
//! Controllers check the caller's permissions, convert DTOs into domain input,
//! call the service layer and convert the result back into DTOs.

pub mod auth;
pub mod pickup_point;
pub mod product;
pub mod reception;
