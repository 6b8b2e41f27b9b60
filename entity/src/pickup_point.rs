use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::City;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pickup_point")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub registration_date: DateTimeUtc,
    pub city: City,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::receiving::Entity")]
    Receiving,
}

impl Related<super::receiving::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Receiving.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
