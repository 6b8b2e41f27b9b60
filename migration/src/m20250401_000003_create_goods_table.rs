use sea_orm_migration::{prelude::*, schema::*};

use super::m20250401_000002_create_receiving_table::Receiving;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Goods::Table)
                    .if_not_exists()
                    .col(pk_uuid(Goods::Id))
                    .col(timestamp_with_time_zone(Goods::AcceptedDatetime))
                    .col(string(Goods::ProductType))
                    .col(uuid(Goods::ReceivingId))
                    // `bigserial`: drawn from a sequence, never from reading the table.
                    .col(big_integer(Goods::Seq).auto_increment())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_goods_receiving_id")
                            .from(Goods::Table, Goods::ReceivingId)
                            .to(Receiving::Table, Receiving::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_goods_receiving_seq")
                    .table(Goods::Table)
                    .col(Goods::ReceivingId)
                    .col(Goods::Seq)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Goods::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Goods {
    Table,
    Id,
    AcceptedDatetime,
    ProductType,
    ReceivingId,
    Seq,
}
