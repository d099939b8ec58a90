use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::types::error::AppError;
use crate::types::validate::{self, Validate};

pub const MIN_PASSWORD_CHARS: usize = 8;

/// A user as exposed outward. Carries no secret.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<entity::user::Model> for User {
    fn from(m: entity::user::Model) -> Self {
        Self { id: m.id, name: m.name, email: m.email }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RUserRegister {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Validate for RUserRegister {
    fn validate(&self) -> Result<(), AppError> {
        validate::required("name", &self.name)?;
        validate::max_chars("name", &self.name, 100)?;
        validate::required("email", &self.email)?;
        validate::email("email", self.email.trim())?;
        validate::min_chars("password", &self.password, MIN_PASSWORD_CHARS)?;
        validate::max_chars("password", &self.password, 256)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RUserLogin {
    pub email: String,
    pub password: String,
}

impl Validate for RUserLogin {
    fn validate(&self) -> Result<(), AppError> {
        validate::required("email", &self.email)?;
        validate::required("password", &self.password)
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserLoginRes {
    pub token: String,
}

pub struct DBUserCreate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
