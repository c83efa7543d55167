use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MarketPrice::Table)
                    .if_not_exists()
                    .col(pk_auto(MarketPrice::Id))
                    .col(string(MarketPrice::ItemName))
                    .col(string(MarketPrice::Category))
                    .col(string(MarketPrice::Market))
                    .col(string(MarketPrice::Unit))
                    .col(double(MarketPrice::Price))
                    .col(timestamp_with_time_zone(MarketPrice::RecordedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MarketPrice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MarketPrice {
    Table,
    Id,
    ItemName,
    Category,
    Market,
    Unit,
    Price,
    RecordedAt,
}
