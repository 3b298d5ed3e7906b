use sea_orm::entity::prelude::*;

/// User account. `password` holds an Argon2 PHC string.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::apiaries::Entity")]
    Apiaries,
    #[sea_orm(has_many = "super::sessions::Entity")]
    Sessions,
}

impl Related<super::apiaries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Apiaries.def()
    }
}

impl Related<super::sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
