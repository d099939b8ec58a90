use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const TOKEN_ALG: &str = "HS256";

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct TokenHeader {
    pub alg: String,
    pub typ: String,
}

impl Default for TokenHeader {
    fn default() -> Self {
        Self { alg: TOKEN_ALG.to_string(), typ: "JWT".to_string() }
    }
}

/// Claims carried by a bearer credential. Timestamps are unix seconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// Identity the access gate attaches to an authenticated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub id: Uuid,
}
