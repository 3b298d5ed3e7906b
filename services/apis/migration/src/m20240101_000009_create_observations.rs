use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Observations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Observations::ObservationId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Observations::Queenright).boolean().not_null())
                    .col(ColumnDef::new(Observations::QueenCells).integer().not_null())
                    .col(ColumnDef::new(Observations::Bias).boolean().not_null())
                    .col(ColumnDef::new(Observations::BroodFrames).integer().not_null())
                    .col(ColumnDef::new(Observations::StoreFrames).integer().not_null())
                    .col(ColumnDef::new(Observations::ChalkBrood).boolean().not_null())
                    .col(ColumnDef::new(Observations::FoulBrood).boolean().not_null())
                    .col(ColumnDef::new(Observations::VarroaCount).integer().not_null())
                    .col(ColumnDef::new(Observations::Temper).integer().not_null())
                    .col(ColumnDef::new(Observations::Notes).text().not_null())
                    .col(
                        ColumnDef::new(Observations::InspectionId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Observations::Table, Observations::InspectionId)
                            .to(Inspections::Table, Inspections::InspectionId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Observations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Observations {
    Table,
    ObservationId,
    Queenright,
    QueenCells,
    Bias,
    BroodFrames,
    StoreFrames,
    ChalkBrood,
    FoulBrood,
    VarroaCount,
    Temper,
    Notes,
    InspectionId,
}

#[derive(Iden)]
enum Inspections {
    Table,
    InspectionId,
}
