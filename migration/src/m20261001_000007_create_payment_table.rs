use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000006_create_billing_table::Billing;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_auto(Payment::Id))
                    .col(integer(Payment::BillingId))
                    .col(string(Payment::OrderRef))
                    .col(string(Payment::Method))
                    .col(string(Payment::Status))
                    .col(double(Payment::Amount))
                    .col(string_null(Payment::CardHolder))
                    .col(string_null(Payment::CardLast4))
                    .col(string_null(Payment::CardExpiry))
                    .col(string_null(Payment::SlipImage))
                    .col(string_null(Payment::InvoicePath))
                    .col(timestamp_with_time_zone(Payment::CreatedAt))
                    .col(timestamp_with_time_zone(Payment::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_billing_id")
                            .from(Payment::Table, Payment::BillingId)
                            .to(Billing::Table, Billing::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    Id,
    BillingId,
    OrderRef,
    Method,
    Status,
    Amount,
    CardHolder,
    CardLast4,
    CardExpiry,
    SlipImage,
    InvoicePath,
    CreatedAt,
    UpdatedAt,
}
