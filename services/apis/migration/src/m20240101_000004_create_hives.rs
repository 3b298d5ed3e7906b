use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hives::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hives::HiveId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Hives::Name).string().not_null())
                    .col(ColumnDef::new(Hives::ApiaryId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Hives::Table, Hives::ApiaryId)
                            .to(Apiaries::Table, Apiaries::ApiaryId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hives_apiary_id")
                    .table(Hives::Table)
                    .col(Hives::ApiaryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hives::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Hives {
    Table,
    HiveId,
    Name,
    ApiaryId,
}

#[derive(Iden)]
enum Apiaries {
    Table,
    ApiaryId,
}
