use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PickupPoint::Table)
                    .if_not_exists()
                    .col(pk_uuid(PickupPoint::Id))
                    .col(
                        timestamp_with_time_zone(PickupPoint::RegistrationDate)
                            .default(Expr::current_timestamp()),
                    )
                    .col(string(PickupPoint::City))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PickupPoint::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PickupPoint {
    Table,
    Id,
    RegistrationDate,
    City,
}
