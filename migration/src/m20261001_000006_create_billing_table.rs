use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Billing::Table)
                    .if_not_exists()
                    .col(pk_auto(Billing::Id))
                    .col(string(Billing::UserRef))
                    .col(string(Billing::FullName))
                    .col(string(Billing::Email))
                    .col(string(Billing::Phone))
                    .col(string(Billing::Address))
                    .col(string(Billing::City))
                    .col(string(Billing::PostalCode))
                    .col(timestamp_with_time_zone(Billing::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Billing::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Billing {
    Table,
    Id,
    UserRef,
    FullName,
    Email,
    Phone,
    Address,
    City,
    PostalCode,
    CreatedAt,
}
