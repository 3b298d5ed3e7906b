use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inspections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Inspections::InspectionId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Inspections::InspectionTimestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Inspections::ColonyId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Inspections::Table, Inspections::ColonyId)
                            .to(Colonies::Table, Colonies::ColonyId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_inspections_colony_id")
                    .table(Inspections::Table)
                    .col(Inspections::ColonyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inspections::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Inspections {
    Table,
    InspectionId,
    InspectionTimestamp,
    ColonyId,
}

#[derive(Iden)]
enum Colonies {
    Table,
    ColonyId,
}
