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
                    .table(ForumEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(ForumEntry::Id))
                    .col(integer(ForumEntry::UserId))
                    .col(text(ForumEntry::Question))
                    .col(string_null(ForumEntry::Category))
                    .col(text_null(ForumEntry::Answer))
                    .col(integer_null(ForumEntry::AnsweredBy))
                    .col(timestamp_with_time_zone(ForumEntry::CreatedAt))
                    .col(timestamp_with_time_zone_null(ForumEntry::AnsweredAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forum_entry_user_id")
                            .from(ForumEntry::Table, ForumEntry::UserId)
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
            .drop_table(Table::drop().table(ForumEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ForumEntry {
    Table,
    Id,
    UserId,
    Question,
    Category,
    Answer,
    AnsweredBy,
    CreatedAt,
    AnsweredAt,
}
