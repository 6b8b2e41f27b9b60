use sea_orm_migration::{prelude::*, schema::*, sea_orm::ConnectionTrait};

use super::m20250401_000001_create_pickup_point_table::PickupPoint;

/// Backs the "at most one open reception per pickup point" rule at the schema level.
const ONE_IN_PROGRESS_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
    idx_receiving_one_in_progress ON receiving (pickup_point_id) \
    WHERE status = 'in_progress'";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Receiving::Table)
                    .if_not_exists()
                    .col(pk_uuid(Receiving::Id))
                    .col(timestamp_with_time_zone(Receiving::ReceivingDatetime))
                    .col(uuid(Receiving::PickupPointId))
                    .col(string(Receiving::Status))
                    // `bigserial`: drawn from a sequence, never from reading the table.
                    .col(big_integer(Receiving::Seq).auto_increment())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_receiving_pickup_point_id")
                            .from(Receiving::Table, Receiving::PickupPointId)
                            .to(PickupPoint::Table, PickupPoint::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_receiving_pickup_point_seq")
                    .table(Receiving::Table)
                    .col(Receiving::PickupPointId)
                    .col(Receiving::Seq)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(ONE_IN_PROGRESS_INDEX)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Receiving::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Receiving {
    Table,
    Id,
    ReceivingDatetime,
    PickupPointId,
    Status,
    Seq,
}
