pub use sea_orm_migration::prelude::*;

mod m20250401_000001_create_pickup_point_table;
mod m20250401_000002_create_receiving_table;
mod m20250401_000003_create_goods_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250401_000001_create_pickup_point_table::Migration),
            Box::new(m20250401_000002_create_receiving_table::Migration),
            Box::new(m20250401_000003_create_goods_table::Migration),
        ]
    }
}
