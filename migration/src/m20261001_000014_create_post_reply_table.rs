use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000013_create_post_table::Post,
    m20261001_000001_create_user_table::User,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostReply::Table)
                    .if_not_exists()
                    .col(pk_auto(PostReply::Id))
                    .col(integer(PostReply::PostId))
                    .col(integer(PostReply::UserId))
                    .col(text(PostReply::Content))
                    .col(timestamp_with_time_zone(PostReply::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_reply_post_id")
                            .from(PostReply::Table, PostReply::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_reply_user_id")
                            .from(PostReply::Table, PostReply::UserId)
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
            .drop_table(Table::drop().table(PostReply::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PostReply {
    Table,
    Id,
    PostId,
    UserId,
    Content,
    CreatedAt,
}
