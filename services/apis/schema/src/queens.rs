use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "queens")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub queen_id: i32,
    pub colour: String,
    pub clipped: bool,
    pub colony_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::colonies::Entity",
        from = "Column::ColonyId",
        to = "super::colonies::Column::ColonyId"
    )]
    Colony,
}

impl Related<super::colonies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Colony.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
