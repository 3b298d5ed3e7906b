use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Apiaries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Apiaries::ApiaryId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Apiaries::Name).string().not_null())
                    .col(ColumnDef::new(Apiaries::Location).string().not_null())
                    .col(ColumnDef::new(Apiaries::UserId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Apiaries::Table, Apiaries::UserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_apiaries_user_id")
                    .table(Apiaries::Table)
                    .col(Apiaries::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Apiaries::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Apiaries {
    Table,
    ApiaryId,
    Name,
    Location,
    UserId,
}

#[derive(Iden)]
enum Users {
    Table,
    UserId,
}
