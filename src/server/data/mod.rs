//! Database repository layer for pickup points, receptions and products.
//!
//! Repositories use SeaORM entity models internally. The reception and product
//! repositories are the lifecycle engines: each state transition runs inside one
//! serializable [`unit_of_work::UnitOfWork`] and takes row locks before reading the
//! state it is about to change, so concurrent requests for the same pickup point
//! are applied one at a time by the database.

pub mod pickup_point;
pub mod product;
pub mod reception;
pub mod unit_of_work;
