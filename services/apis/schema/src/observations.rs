use sea_orm::entity::prelude::*;

/// Colony condition recorded during an inspection.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "observations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub observation_id: i32,
    pub queenright: bool,
    pub queen_cells: i32,
    pub bias: bool,
    pub brood_frames: i32,
    pub store_frames: i32,
    pub chalk_brood: bool,
    pub foul_brood: bool,
    pub varroa_count: i32,
    pub temper: i32,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
    pub inspection_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::inspections::Entity",
        from = "Column::InspectionId",
        to = "super::inspections::Column::InspectionId"
    )]
    Inspection,
}

impl Related<super::inspections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inspection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
