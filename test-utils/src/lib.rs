//! PVZ Service Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the pickup
//! point service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, the pickup point schema, and factories for test data.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for pickup points, receptions and products
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_reception_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_pvz_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let pickup_point = factory::create_pickup_point(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
