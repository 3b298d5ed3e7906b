use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Actions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Actions::ActionId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Actions::Notes).text().not_null())
                    .col(ColumnDef::new(Actions::InspectionId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Actions::Table, Actions::InspectionId)
                            .to(Inspections::Table, Inspections::InspectionId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Actions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Actions {
    Table,
    ActionId,
    Notes,
    InspectionId,
}

#[derive(Iden)]
enum Inspections {
    Table,
    InspectionId,
}
