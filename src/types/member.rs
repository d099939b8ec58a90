use serde::Serialize;
use uuid::Uuid;

use crate::types::error::AppError;

/// Where a user stands relative to one post.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MemberState {
    NotMember,
    Author,
    Member,
}

impl MemberState {
    /// Author wins over membership; the author is never an explicit member.
    pub fn resolve(author_id: Uuid, user_id: Uuid, in_members: bool) -> Self {
        if author_id == user_id {
            MemberState::Author
        } else if in_members {
            MemberState::Member
        } else {
            MemberState::NotMember
        }
    }

    /// NotMember -> Member.
    pub fn admit(self) -> Result<(), AppError> {
        match self {
            MemberState::NotMember => Ok(()),
            MemberState::Author => Err(AppError::MemberIsAuthor),
            MemberState::Member => Err(AppError::MemberAlreadyExists),
        }
    }

    /// Member -> NotMember.
    pub fn release(self) -> Result<(), AppError> {
        match self {
            MemberState::Member => Ok(()),
            MemberState::Author => Err(AppError::AuthorCannotBeRemoved),
            MemberState::NotMember => Err(AppError::MemberNotExists),
        }
    }
}
