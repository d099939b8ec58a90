use sea_orm_migration::prelude::*;

use crate::m20250101_000001_create_user_table::User;
use crate::m20250101_000002_create_post_table::Post;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum PostMember {
    Table,
    PostId,
    UserId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // PK(post_id, user_id) is what makes "add if absent" a single statement.
        m.create_table(
            Table::create()
                .table(PostMember::Table)
                .if_not_exists()
                .col(ColumnDef::new(PostMember::PostId).uuid().not_null())
                .col(ColumnDef::new(PostMember::UserId).uuid().not_null())
                .col(ColumnDef::new(PostMember::CreatedAt).timestamp_with_time_zone().not_null())
                .primary_key(
                    Index::create()
                        .name("pk_post_member")
                        .col(PostMember::PostId)
                        .col(PostMember::UserId)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_post_member_post")
                        .from(PostMember::Table, PostMember::PostId)
                        .to(Post::Table, Post::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_post_member_user")
                        .from(PostMember::Table, PostMember::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_post_member_user")
                .table(PostMember::Table)
                .col(PostMember::UserId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes implicitly with table
        m.drop_table(Table::drop().table(PostMember::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
