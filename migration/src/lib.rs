pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_user_table;
mod m20261001_000002_create_land_table;
mod m20261001_000003_create_product_table;
mod m20261001_000004_create_order_table;
mod m20261001_000005_create_order_item_table;
mod m20261001_000006_create_billing_table;
mod m20261001_000007_create_payment_table;
mod m20261001_000008_create_payment_item_table;
mod m20261001_000009_create_notification_table;
mod m20261001_000010_create_crop_tracker_table;
mod m20261001_000011_create_market_price_table;
mod m20261001_000012_create_forum_entry_table;
mod m20261001_000013_create_post_table;
mod m20261001_000014_create_post_reply_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_user_table::Migration),
            Box::new(m20261001_000002_create_land_table::Migration),
            Box::new(m20261001_000003_create_product_table::Migration),
            Box::new(m20261001_000004_create_order_table::Migration),
            Box::new(m20261001_000005_create_order_item_table::Migration),
            Box::new(m20261001_000006_create_billing_table::Migration),
            Box::new(m20261001_000007_create_payment_table::Migration),
            Box::new(m20261001_000008_create_payment_item_table::Migration),
            Box::new(m20261001_000009_create_notification_table::Migration),
            Box::new(m20261001_000010_create_crop_tracker_table::Migration),
            Box::new(m20261001_000011_create_market_price_table::Migration),
            Box::new(m20261001_000012_create_forum_entry_table::Migration),
            Box::new(m20261001_000013_create_post_table::Migration),
            Box::new(m20261001_000014_create_post_reply_table::Migration),
        ]
    }
}
