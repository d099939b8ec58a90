use crate::db::service::DatabaseService;
use crate::types::{error::AppError, member::MemberState};
use crate::utils::password;
use chrono::Utc;
use entity::post_member::{ActiveModel as MemberActive, Entity as PostMember};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set, SqlErr};
use tracing::info;
use uuid::Uuid;

/*
 Membership changes are each one conditional statement:
   add    -> INSERT into post_member, guarded by PK(post_id, user_id)
   remove -> DELETE ... WHERE post_id AND user_id, checked by rows affected
 The author check is a plain read because post.author_id is never updated.
 Two concurrent adds for the same user therefore cannot both succeed.
 */

impl DatabaseService {
    /// `user_id` joins `post_id` as a collaborator. The caller is always the
    /// user being added.
    pub async fn add_member(&self, post_id: &str, user_id: Uuid) -> Result<(), AppError> {
        let post = self.member_target(post_id).await?;
        MemberState::resolve(post.author_id, user_id, false).admit()?;

        let res = PostMember::insert(MemberActive {
            post_id: Set(post.id),
            user_id: Set(user_id),
            created_at: Set(Utc::now()),
        })
        .exec_without_returning(&self.database_connection)
        .await;

        match res {
            Ok(_) => {
                info!("user {} joined post {}", user_id, post.id);
                Ok(())
            }
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => MemberState::Member.admit(),
                // the credential's user no longer exists
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => Err(AppError::Unauthorized),
                _ => Err(err.into()),
            },
        }
    }

    /// `user_id` leaves `post_id`. The caller is always the user being removed.
    pub async fn remove_member(&self, post_id: &str, user_id: Uuid) -> Result<(), AppError> {
        let post = self.member_target(post_id).await?;
        if post.author_id == user_id {
            return MemberState::Author.release();
        }

        let res = PostMember::delete_many()
            .filter(entity::post_member::Column::PostId.eq(post.id))
            .filter(entity::post_member::Column::UserId.eq(user_id))
            .exec(&self.database_connection)
            .await?;

        if res.rows_affected == 0 {
            return MemberState::NotMember.release();
        }
        info!("user {} left post {}", user_id, post.id);
        Ok(())
    }

    /// Current standing of `user_id` on a post.
    pub async fn member_state(&self, post_id: &str, user_id: Uuid) -> Result<MemberState, AppError> {
        let post = self.member_target(post_id).await?;
        let in_members = PostMember::find_by_id((post.id, user_id))
            .one(&self.database_connection)
            .await?
            .is_some();
        Ok(MemberState::resolve(post.author_id, user_id, in_members))
    }

    async fn member_target(&self, post_id: &str) -> Result<entity::post::Model, AppError> {
        let id = password::parse_id(post_id).ok_or(AppError::PostNotFound)?;
        self.find_post(id).await?.ok_or(AppError::PostNotFound)
    }
}
