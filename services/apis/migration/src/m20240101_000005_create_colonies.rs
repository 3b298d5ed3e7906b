use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Colonies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Colonies::ColonyId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Colonies::HiveId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Colonies::Table, Colonies::HiveId)
                            .to(Hives::Table, Hives::HiveId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Colonies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Colonies {
    Table,
    ColonyId,
    HiveId,
}

#[derive(Iden)]
enum Hives {
    Table,
    HiveId,
}
