use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "colonies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub colony_id: i32,
    pub hive_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hives::Entity",
        from = "Column::HiveId",
        to = "super::hives::Column::HiveId"
    )]
    Hive,
    #[sea_orm(has_many = "super::queens::Entity")]
    Queens,
    #[sea_orm(has_many = "super::inspections::Entity")]
    Inspections,
}

impl Related<super::hives::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hive.def()
    }
}

impl Related<super::queens::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Queens.def()
    }
}

impl Related<super::inspections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inspections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
