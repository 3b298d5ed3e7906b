use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hives")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub hive_id: i32,
    pub name: String,
    pub apiary_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::apiaries::Entity",
        from = "Column::ApiaryId",
        to = "super::apiaries::Column::ApiaryId"
    )]
    Apiary,
    #[sea_orm(has_many = "super::colonies::Entity")]
    Colonies,
}

impl Related<super::apiaries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Apiary.def()
    }
}

impl Related<super::colonies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Colonies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
