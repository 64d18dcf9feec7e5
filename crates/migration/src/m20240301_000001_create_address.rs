//! Create `address` table.
//! Addresses are keyed by an opaque string id and always carry a language code.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(string_len(Address::Id, 128).primary_key())
                    .col(string_len(Address::Language, 8).not_null())
                    .col(string_len(Address::Name, 256).not_null())
                    .col(string_len(Address::Street, 512).not_null())
                    .col(string_len(Address::City, 128).not_null())
                    .col(string_len_null(Address::Region, 128))
                    .col(string_len(Address::PostalCode, 32).not_null())
                    .col(string_len(Address::Country, 128).not_null())
                    .col(
                        array(Address::Tags, ColumnType::Text)
                            .not_null()
                            .default(Expr::cust("'{}'")),
                    )
                    .col(timestamp_with_time_zone(Address::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Address::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Address {
    Table,
    Id,
    Language,
    Name,
    Street,
    City,
    Region,
    PostalCode,
    Country,
    Tags,
    CreatedAt,
}
