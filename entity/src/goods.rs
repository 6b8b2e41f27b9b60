use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ProductType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "goods")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub accepted_datetime: DateTimeUtc,
    pub product_type: ProductType,
    pub receiving_id: Uuid,
    /// Insertion order, used to break timestamp ties. Assigned by the database on insert.
    #[sea_orm(default_value = 0)]
    pub seq: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::receiving::Entity",
        from = "Column::ReceivingId",
        to = "super::receiving::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Receiving,
}

impl Related<super::receiving::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Receiving.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
