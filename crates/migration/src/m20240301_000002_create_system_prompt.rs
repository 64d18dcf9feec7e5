//! Create `system_prompt` table.
//! One row per (kind, language); `kind` is `system` or `address_generation`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SystemPrompt::Table)
                    .if_not_exists()
                    .col(uuid(SystemPrompt::Id).primary_key())
                    .col(string_len(SystemPrompt::Kind, 32).not_null())
                    .col(string_len(SystemPrompt::Language, 8).not_null())
                    .col(text(SystemPrompt::Content).not_null())
                    .col(timestamp_with_time_zone(SystemPrompt::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        // a language has at most one prompt of each kind
        manager
            .create_index(
                Index::create()
                    .name("uniq_system_prompt_kind_language")
                    .table(SystemPrompt::Table)
                    .col(SystemPrompt::Kind)
                    .col(SystemPrompt::Language)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SystemPrompt::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SystemPrompt {
    Table,
    Id,
    Kind,
    Language,
    Content,
    UpdatedAt,
}
