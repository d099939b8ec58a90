use sea_orm_migration::prelude::*;

use crate::m20250101_000002_create_post_table::Post;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum PostImage {
    Table,
    Id,
    PostId,
    ContentType,
    Data,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(PostImage::Table)
                .if_not_exists()
                .col(ColumnDef::new(PostImage::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(PostImage::PostId).uuid().not_null())
                .col(ColumnDef::new(PostImage::ContentType).string().not_null())
                .col(ColumnDef::new(PostImage::Data).blob().not_null())
                .col(ColumnDef::new(PostImage::CreatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_post_image_post")
                        .from(PostImage::Table, PostImage::PostId)
                        .to(Post::Table, Post::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_post_image_post")
                .table(PostImage::Table)
                .col(PostImage::PostId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(PostImage::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
