use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CropTracker::Table)
                    .if_not_exists()
                    .col(pk_auto(CropTracker::Id))
                    .col(integer(CropTracker::UserId))
                    .col(string(CropTracker::CropName))
                    .col(string_null(CropTracker::Variety))
                    .col(date(CropTracker::PlantedDate))
                    .col(date(CropTracker::ExpectedHarvestDate))
                    .col(date_null(CropTracker::ActualHarvestDate))
                    .col(string(CropTracker::GrowthStatus))
                    .col(string(CropTracker::HealthStatus))
                    .col(text_null(CropTracker::Notes))
                    .col(timestamp_with_time_zone(CropTracker::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_crop_tracker_user_id")
                            .from(CropTracker::Table, CropTracker::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CropTracker::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CropTracker {
    Table,
    Id,
    UserId,
    CropName,
    Variety,
    PlantedDate,
    ExpectedHarvestDate,
    ActualHarvestDate,
    GrowthStatus,
    HealthStatus,
    Notes,
    CreatedAt,
}
