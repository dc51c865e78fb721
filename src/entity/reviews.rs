use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub artwork_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub is_approved: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::artworks::Entity",
        from = "Column::ArtworkId",
        to = "super::artworks::Column::Id"
    )]
    Artworks,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::artworks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artworks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
