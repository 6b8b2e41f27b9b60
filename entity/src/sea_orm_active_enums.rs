use sea_orm::entity::prelude::*;

/// Cities where a pickup point may be registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum City {
    #[sea_orm(string_value = "moscow")]
    Moscow,
    #[sea_orm(string_value = "saint_petersburg")]
    SaintPetersburg,
    #[sea_orm(string_value = "kazan")]
    Kazan,
}

/// Lifecycle state of a reception. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum ReceptionStatus {
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "closed")]
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum ProductType {
    #[sea_orm(string_value = "electronics")]
    Electronics,
    #[sea_orm(string_value = "clothes")]
    Clothes,
    #[sea_orm(string_value = "shoes")]
    Shoes,
}
