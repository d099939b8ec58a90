use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::error::AppError;
use crate::types::member::MemberState;
use crate::types::user::User;
use crate::types::validate::{self, Validate};

pub const MAX_PAGE_LIMIT: u64 = 50;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Post {
    pub id: Uuid,
    pub author: User,
    /// Collaborators in join order. Never contains the author.
    pub members: Vec<User>,
    pub title: String,
    pub description: String,
    pub team_size: u32,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn member_state(&self, user_id: Uuid) -> MemberState {
        MemberState::resolve(
            self.author.id,
            user_id,
            self.members.iter().any(|m| m.id == user_id),
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RPostCreate {
    pub title: String,
    pub description: String,
    pub team_size: u32,
}

impl Validate for RPostCreate {
    fn validate(&self) -> Result<(), AppError> {
        validate::required("title", &self.title)?;
        validate::max_chars("title", &self.title, 200)?;
        validate::required("description", &self.description)?;
        validate::max_chars("description", &self.description, 5000)
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ImageCreateRes {
    pub id: Uuid,
}

/// Pagination as sent by the client. Signed so negatives reach validation
/// instead of failing deserialization with an opaque message.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy)]
#[serde(default)]
pub struct PageOptions {
    pub offset: i64,
    pub limit: i64,
}

/// Pagination after validation and clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u64,
    pub limit: u64,
}

impl Validate for PageOptions {
    fn validate(&self) -> Result<(), AppError> {
        if self.offset < 0 {
            return Err(AppError::Validation("offset must be >= 0".into()));
        }
        if self.limit < 0 {
            return Err(AppError::Validation("limit must be >= 0".into()));
        }
        Ok(())
    }
}

impl PageOptions {
    /// A limit of 0 or above the maximum silently becomes the maximum.
    pub fn into_page(self) -> Result<Page, AppError> {
        self.validate()?;
        let limit = match self.limit as u64 {
            0 => MAX_PAGE_LIMIT,
            l if l > MAX_PAGE_LIMIT => MAX_PAGE_LIMIT,
            l => l,
        };
        Ok(Page { offset: self.offset as u64, limit })
    }
}
