use crate::server::{
    data::{product::ProductRepository, reception::ReceptionRepository},
    error::lifecycle::LifecycleError,
};
use chrono::Utc;
use entity::sea_orm_active_enums::{ProductType, ReceptionStatus};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod remove_last;
