use crate::db::service::DatabaseService;
use crate::{
    types::{
        error::AppError,
        user::{normalize_email, DBUserCreate, User},
    },
    utils::password,
};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as UserEntity, Model as UserModel};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set, SqlErr};
use uuid::Uuid;

impl DatabaseService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(UserEntity::find()
            .filter(entity::user::Column::Email.eq(normalize_email(email)))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    /// Directory lookup. The returned record never carries the password hash.
    pub async fn get_user(&self, id: &str) -> Result<User, AppError> {
        let id = password::parse_id(id).ok_or(AppError::NotFound)?;
        self.find_user(id)
            .await?
            .map(User::from)
            .ok_or(AppError::NotFound)
    }

    pub(crate) async fn find_user(&self, id: Uuid) -> Result<Option<UserModel>, AppError> {
        Ok(UserEntity::find_by_id(id)
            .one(&self.database_connection)
            .await?)
    }

    /// Full record including the password hash; only for login.
    pub(crate) async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(UserEntity::find()
            .filter(entity::user::Column::Email.eq(normalize_email(email)))
            .one(&self.database_connection)
            .await?)
    }

    /// Signup: create user.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<User, AppError> {
        let email = normalize_email(&payload.email);
        if self.user_exists_by_email(&email).await? {
            return Err(AppError::AlreadyExists);
        }
        let uid = password::new_id();
        let now = Utc::now();
        let model = UserModel {
            id: uid,
            name: payload.name.trim().to_string(),
            email,
            password_hash: payload.password_hash,
            created_at: now,
            updated_at: now,
        };

        let res = UserEntity::insert(UserActive {
            id: Set(model.id),
            name: Set(model.name.clone()),
            email: Set(model.email.clone()),
            password_hash: Set(model.password_hash.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec_without_returning(&self.database_connection)
        .await;

        match res {
            Ok(_) => Ok(model.into()),
            // lost a race with a concurrent signup for the same email
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::AlreadyExists),
                _ => Err(err.into()),
            },
        }
    }

    /// Checks an email/password pair. Unknown email and wrong password are
    /// indistinguishable to the caller.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self
            .find_user_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredential)?;
        if !password::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredential);
        }
        Ok(user.into())
    }
}
