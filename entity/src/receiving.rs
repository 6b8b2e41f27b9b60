use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ReceptionStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "receiving")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub receiving_datetime: DateTimeUtc,
    pub pickup_point_id: Uuid,
    pub status: ReceptionStatus,
    /// Insertion order, used to break timestamp ties. Assigned by the database on insert.
    #[sea_orm(default_value = 0)]
    pub seq: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::goods::Entity")]
    Goods,
    #[sea_orm(
        belongs_to = "super::pickup_point::Entity",
        from = "Column::PickupPointId",
        to = "super::pickup_point::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PickupPoint,
}

impl Related<super::goods::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Goods.def()
    }
}

impl Related<super::pickup_point::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PickupPoint.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
