//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let pickup_point = factory::create_pickup_point(&db).await?;
//! let reception = factory::create_reception(&db, pickup_point.id).await?;
//! let product = factory::create_product(&db, reception.id).await?;
//!
//! // Or everything at once
//! let (pickup_point, reception) = factory::helpers::create_open_reception(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let reception = factory::reception::ReceptionFactory::new(&db, pickup_point.id)
//!     .status(ReceptionStatus::Closed)
//!     .receiving_datetime(Utc::now() - Duration::days(2))
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod pickup_point;
pub mod product;
pub mod reception;

pub use pickup_point::create_pickup_point;
pub use product::create_product;
pub use reception::{create_closed_reception, create_reception};
