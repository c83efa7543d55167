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
                    .table(Land::Table)
                    .if_not_exists()
                    .col(pk_auto(Land::Id))
                    .col(string_uniq(Land::LandId))
                    .col(integer(Land::OwnerId))
                    .col(string(Land::Name))
                    .col(string(Land::Location))
                    .col(string(Land::District))
                    .col(double(Land::SizeAcres))
                    .col(string_null(Land::SoilType))
                    .col(string_null(Land::Photo))
                    .col(timestamp_with_time_zone(Land::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_land_owner_id")
                            .from(Land::Table, Land::OwnerId)
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
            .drop_table(Table::drop().table(Land::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Land {
    Table,
    Id,
    LandId,
    OwnerId,
    Name,
    Location,
    District,
    SizeAcres,
    SoilType,
    Photo,
    CreatedAt,
}
