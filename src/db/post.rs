use crate::db::service::DatabaseService;
use crate::types::{
    error::AppError,
    post::{Page, Post, RPostCreate},
    user::User,
    validate::Validate,
};
use crate::utils::password;
use chrono::Utc;
use entity::post::{ActiveModel as PostActive, Entity as PostEntity, Model as PostModel};
use entity::post_member::Entity as PostMember;
use entity::user::Entity as UserEntity;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set, SqlErr};
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

impl DatabaseService {
    /// The author is taken from the verified credential, never from the draft.
    pub async fn create_post(&self, author_id: Uuid, draft: RPostCreate) -> Result<Post, AppError> {
        draft.validate()?;

        // A credential can outlive its user.
        let author = self.find_user(author_id).await?.ok_or(AppError::Unauthorized)?;

        let id = password::new_ordered_id();
        let now = Utc::now();
        PostEntity::insert(PostActive {
            id: Set(id),
            author_id: Set(author.id),
            title: Set(draft.title.trim().to_string()),
            description: Set(draft.description),
            team_size: Set(i64::from(draft.team_size)),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec_without_returning(&self.database_connection)
        .await
        .map_err(|err| match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::Unauthorized,
            _ => err.into(),
        })?;

        info!("user {} created post {}", author.id, id);
        self.load_post(id).await?.ok_or(AppError::PostNotFound)
    }

    pub async fn get_post(&self, id: &str) -> Result<Post, AppError> {
        let id = password::parse_id(id).ok_or(AppError::PostNotFound)?;
        self.load_post(id).await?.ok_or(AppError::PostNotFound)
    }

    /// Posts in creation order.
    pub async fn list_posts(&self, page: Page) -> Result<Vec<Post>, AppError> {
        let posts = PostEntity::find()
            .order_by_asc(entity::post::Column::CreatedAt)
            .order_by_asc(entity::post::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(&self.database_connection)
            .await?;
        self.assemble_posts(posts).await
    }

    pub(crate) async fn find_post(&self, id: Uuid) -> Result<Option<PostModel>, AppError> {
        Ok(PostEntity::find_by_id(id)
            .one(&self.database_connection)
            .await?)
    }

    async fn load_post(&self, id: Uuid) -> Result<Option<Post>, AppError> {
        let Some(model) = self.find_post(id).await? else {
            return Ok(None);
        };
        Ok(self.assemble_posts(vec![model]).await?.pop())
    }

    /// Resolves authors and members for a batch of posts in two queries.
    async fn assemble_posts(&self, posts: Vec<PostModel>) -> Result<Vec<Post>, AppError> {
        if posts.is_empty() {
            return Ok(vec![]);
        }

        let post_ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
        let memberships = PostMember::find()
            .filter(entity::post_member::Column::PostId.is_in(post_ids))
            .order_by_asc(entity::post_member::Column::CreatedAt)
            .order_by_asc(entity::post_member::Column::UserId)
            .all(&self.database_connection)
            .await?;

        let mut user_ids: Vec<Uuid> = posts
            .iter()
            .map(|p| p.author_id)
            .chain(memberships.iter().map(|m| m.user_id))
            .collect();
        user_ids.sort_unstable();
        user_ids.dedup();

        let users: HashMap<Uuid, User> = UserEntity::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(&self.database_connection)
            .await?
            .into_iter()
            .map(|u| (u.id, User::from(u)))
            .collect();

        let mut members: HashMap<Uuid, Vec<User>> = HashMap::new();
        for m in memberships {
            if let Some(user) = users.get(&m.user_id) {
                members.entry(m.post_id).or_default().push(user.clone());
            }
        }

        posts
            .into_iter()
            .map(|p| {
                let author = users
                    .get(&p.author_id)
                    .cloned()
                    .ok_or_else(|| AppError::Internal(format!("post {} has no author record", p.id)))?;
                let team_size = u32::try_from(p.team_size)
                    .map_err(|_| AppError::Internal(format!("post {} has team_size {}", p.id, p.team_size)))?;
                Ok(Post {
                    id: p.id,
                    members: members.remove(&p.id).unwrap_or_default(),
                    author,
                    title: p.title,
                    description: p.description,
                    team_size,
                    created_at: p.created_at,
                })
            })
            .collect()
    }
}
