use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{de::DeserializeOwned, Serialize};
use sha2::Sha256;
use std::fmt;
use uuid::Uuid;

use crate::types::error::AppError;
use crate::types::token::{Claims, TokenHeader, TOKEN_ALG};

type HmacSha256 = Hmac<Sha256>;

/// Issues and verifies bearer credentials.
///
/// A credential is `b64url(header).b64url(claims).b64url(hmac)` where the MAC is
/// HMAC-SHA256 over the first two segments. Nothing is stored server side; the
/// secret is fixed for the life of the process.
#[derive(Clone)]
pub struct TokenSigner {
    secret: Vec<u8>,
    ttl: Duration,
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenSigner {
    pub fn new(secret: impl AsRef<[u8]>, ttl: Duration) -> Self {
        Self { secret: secret.as_ref().to_vec(), ttl }
    }

    pub fn issue(&self, user_id: Uuid) -> Result<String, AppError> {
        self.issue_at(user_id, Utc::now())
    }

    pub fn issue_at(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<String, AppError> {
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        let signing_input = format!(
            "{}.{}",
            encode_segment(&TokenHeader::default())?,
            encode_segment(&claims)?
        );
        let signature = self.sign(signing_input.as_bytes())?;
        Ok(format!("{signing_input}.{}", URL_SAFE_NO_PAD.encode(signature)))
    }

    /// Returns the user id a valid, unexpired credential was issued for.
    /// The id is not checked against the user directory.
    pub fn verify(&self, token: &str) -> Result<Uuid, AppError> {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Uuid, AppError> {
        let mut parts = token.split('.');
        let (header_b64, claims_b64, signature_b64) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(h), Some(c), Some(s), None) => (h, c, s),
            _ => return Err(AppError::InvalidCredential),
        };

        let header: TokenHeader = decode_segment(header_b64)?;
        if header.alg != TOKEN_ALG {
            return Err(AppError::InvalidCredential);
        }

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| AppError::InvalidCredential)?;
        let signing_input = &token[..header_b64.len() + 1 + claims_b64.len()];
        let mut mac = self.mac()?;
        mac.update(signing_input.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| AppError::InvalidCredential)?;

        let claims: Claims = decode_segment(claims_b64)?;
        if claims.exp <= now.timestamp() {
            return Err(AppError::InvalidCredential);
        }
        Ok(claims.sub)
    }

    fn sign(&self, input: &[u8]) -> Result<Vec<u8>, AppError> {
        let mut mac = self.mac()?;
        mac.update(input);
        Ok(mac.finalize().into_bytes().to_vec())
    }

    fn mac(&self) -> Result<HmacSha256, AppError> {
        <HmacSha256 as Mac>::new_from_slice(&self.secret)
            .map_err(|e| AppError::Internal(format!("hmac key rejected: {e}")))
    }
}

fn encode_segment<T: Serialize>(value: &T) -> Result<String, AppError> {
    let json = serde_json::to_vec(value)
        .map_err(|e| AppError::Internal(format!("serialize token segment failed: {e}")))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, AppError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| AppError::InvalidCredential)?;
    serde_json::from_slice(&bytes).map_err(|_| AppError::InvalidCredential)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "an-adequately-long-test-secret-value";

    fn signer() -> TokenSigner {
        TokenSigner::new(SECRET, Duration::hours(1))
    }

    fn swap_segment(token: &str, index: usize, replacement: &str) -> String {
        let mut parts: Vec<&str> = token.split('.').collect();
        parts[index] = replacement;
        parts.join(".")
    }

    #[test]
    fn issued_token_verifies_to_its_subject() {
        let user = Uuid::new_v4();
        let token = signer().issue(user).unwrap();
        assert_eq!(token.split('.').count(), 3);
        assert_eq!(signer().verify(&token).unwrap(), user);
    }

    #[test]
    fn expired_token_is_rejected() {
        let user = Uuid::new_v4();
        let issued = Utc::now() - Duration::hours(2);
        let token = signer().issue_at(user, issued).unwrap();
        assert!(matches!(signer().verify(&token), Err(AppError::InvalidCredential)));

        // exp is exclusive
        let now = Utc::now();
        let token = signer().issue_at(user, now).unwrap();
        assert!(signer().verify_at(&token, now + Duration::hours(1)).is_err());
        assert!(signer().verify_at(&token, now + Duration::minutes(59)).is_ok());
    }

    #[test]
    fn tampered_claims_are_rejected() {
        let token = signer().issue(Uuid::new_v4()).unwrap();
        let forged = Claims { sub: Uuid::new_v4(), iat: 0, exp: i64::MAX };
        let forged = encode_segment(&forged).unwrap();
        let tampered = swap_segment(&token, 1, &forged);
        assert!(matches!(signer().verify(&tampered), Err(AppError::InvalidCredential)));
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let token = signer().issue(Uuid::new_v4()).unwrap();
        let mut sig = URL_SAFE_NO_PAD.decode(token.split('.').nth(2).unwrap()).unwrap();
        sig[0] ^= 0x01;
        let tampered = swap_segment(&token, 2, &URL_SAFE_NO_PAD.encode(sig));
        assert!(matches!(signer().verify(&tampered), Err(AppError::InvalidCredential)));
    }

    #[test]
    fn other_secret_is_rejected() {
        let token = signer().issue(Uuid::new_v4()).unwrap();
        let other = TokenSigner::new("some-other-secret-of-similar-length!", Duration::hours(1));
        assert!(matches!(other.verify(&token), Err(AppError::InvalidCredential)));
    }

    #[test]
    fn unsigned_algorithm_is_rejected() {
        let token = signer().issue(Uuid::new_v4()).unwrap();
        let none = encode_segment(&TokenHeader { alg: "none".into(), typ: "JWT".into() }).unwrap();
        let tampered = swap_segment(&token, 0, &none);
        assert!(signer().verify(&tampered).is_err());
        let stripped = format!("{}.{}.", none, token.split('.').nth(1).unwrap());
        assert!(signer().verify(&stripped).is_err());
    }

    #[test]
    fn structurally_broken_tokens_are_rejected() {
        for garbage in ["", "abc", "a.b", "a.b.c.d", "!!!.???.***", "tok_abcdef"] {
            assert!(
                matches!(signer().verify(garbage), Err(AppError::InvalidCredential)),
                "accepted {garbage:?}"
            );
        }
    }

    #[test]
    fn debug_does_not_print_secret() {
        let out = format!("{:?}", signer());
        assert!(!out.contains(SECRET));
    }
}
