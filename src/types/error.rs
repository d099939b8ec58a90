use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use sea_orm::DbErr;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    // standard web stuffs
    #[error("already exists")]
    AlreadyExists,
    #[error("not found")]
    NotFound,
    #[error("validation error: {0}")]
    Validation(String),
    #[error("invalid credential")]
    InvalidCredential,
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,

    // post membership
    #[error("post not found")]
    PostNotFound,
    #[error("user is already a member of this post")]
    MemberAlreadyExists,
    #[error("the author of a post cannot join it as a member")]
    MemberIsAuthor,
    #[error("user is not a member of this post")]
    MemberNotExists,
    #[error("the author of a post cannot be removed from it")]
    AuthorCannotBeRemoved,

    // infra things
    #[error(transparent)]
    Db(sea_orm::DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::NotFound => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidCredential => "INVALID_CREDENTIAL",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::PostNotFound => "POST_NOT_FOUND",
            Self::MemberAlreadyExists => "MEMBER_ALREADY_EXISTS",
            Self::MemberIsAuthor => "MEMBER_IS_AUTHOR",
            Self::MemberNotExists => "MEMBER_NOT_EXISTS",
            Self::AuthorCannotBeRemoved => "AUTHOR_CANNOT_BE_REMOVED",
            Self::Db(_) => "DB_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn from_db(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(_) => AppError::NotFound,
            _ => AppError::Db(err),
        }
    }

    fn is_internal(&self) -> bool {
        matches!(self, Self::Db(_) | Self::Internal(_))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::AlreadyExists | Self::MemberIsAuthor | Self::AuthorCannotBeRemoved => StatusCode::CONFLICT,
            Self::NotFound | Self::PostNotFound | Self::MemberNotExists => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::MemberAlreadyExists => StatusCode::BAD_REQUEST,
            Self::InvalidCredential | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Storage detail stays in the log.
        let message = if self.is_internal() {
            error!("{}: {}", self.kind(), self);
            "internal server error".to_string()
        } else {
            self.to_string()
        };
        HttpResponse::build(self.status_code())
            .json(ErrorBody { error: self.kind(), message })
    }
}
