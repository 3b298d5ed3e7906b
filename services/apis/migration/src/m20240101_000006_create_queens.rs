use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Queens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Queens::QueenId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Queens::Colour).string().not_null())
                    .col(ColumnDef::new(Queens::Clipped).boolean().not_null())
                    .col(ColumnDef::new(Queens::ColonyId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Queens::Table, Queens::ColonyId)
                            .to(Colonies::Table, Colonies::ColonyId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Queens::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Queens {
    Table,
    QueenId,
    Colour,
    Clipped,
    ColonyId,
}

#[derive(Iden)]
enum Colonies {
    Table,
    ColonyId,
}
