use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_id: i32,
    pub artwork_id: i32,
    pub quantity: i32,
    /// Snapshot of the artwork price at order time.
    pub unit_price: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::orders::Entity",
        from = "Column::OrderId",
        to = "super::orders::Column::Id"
    )]
    Orders,
    #[sea_orm(
        belongs_to = "super::artworks::Entity",
        from = "Column::ArtworkId",
        to = "super::artworks::Column::Id"
    )]
    Artworks,
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::artworks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artworks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
