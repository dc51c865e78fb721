use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "genres")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::artworks::Entity")]
    Artworks,
}

impl Related<super::artworks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artworks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
