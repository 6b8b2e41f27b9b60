//! SeaORM entity models for the pickup point database.

pub mod prelude;

pub mod goods;
pub mod pickup_point;
pub mod receiving;
pub mod sea_orm_active_enums;
