use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Address: every listing filters on language
        manager
            .create_index(
                Index::create()
                    .name("idx_address_language_id")
                    .table(Address::Table)
                    .col(Address::Language)
                    .col(Address::Id)
                    .to_owned(),
            )
            .await?;

        // Address: tag overlap (`&&`) needs GIN, which the index builder cannot express
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE INDEX IF NOT EXISTS idx_address_tags ON address USING GIN (tags)",
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_address_tags")
            .await?;
        manager
            .drop_index(Index::drop().name("idx_address_language_id").table(Address::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Address {
    Table,
    Id,
    Language,
}
