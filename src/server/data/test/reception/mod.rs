use crate::server::{data::reception::ReceptionRepository, error::lifecycle::LifecycleError};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::ReceptionStatus;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod close_last;
mod open;
