use sea_orm_migration::prelude::*;

use crate::m20250101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
pub(crate) enum Post {
    Table,
    Id,
    AuthorId,
    Title,
    Description,
    TeamSize,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Post::Table)
                .if_not_exists()
                .col(ColumnDef::new(Post::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Post::AuthorId).uuid().not_null())
                .col(ColumnDef::new(Post::Title).string().not_null())
                .col(ColumnDef::new(Post::Description).text().not_null())
                .col(ColumnDef::new(Post::TeamSize).big_integer().not_null().default(0))
                .col(ColumnDef::new(Post::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Post::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_post_author")
                        .from(Post::Table, Post::AuthorId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        // listing walks posts in creation order
        m.create_index(
            Index::create()
                .name("idx_post_created_at")
                .table(Post::Table)
                .col(Post::CreatedAt)
                .col(Post::Id)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_post_author_id")
                .table(Post::Table)
                .col(Post::AuthorId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Post::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
