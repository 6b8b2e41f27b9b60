pub use super::goods::Entity as Goods;
pub use super::pickup_point::Entity as PickupPoint;
pub use super::receiving::Entity as Receiving;
