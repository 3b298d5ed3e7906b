use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "apiaries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub apiary_id: i32,
    pub name: String,
    pub location: String,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::UserId"
    )]
    User,
    #[sea_orm(has_many = "super::hives::Entity")]
    Hives,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::hives::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hives.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
