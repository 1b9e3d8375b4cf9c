use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Session token lifetime in seconds (24 hours).
const SESSION_TTL_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("failed to sign session token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
    #[error("invalid or expired session token")]
    InvalidToken,
}

/// Claims carried by a session token.
///
/// `sub` is the user id; name and email ride along so the session endpoint
/// can answer without a database lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: i32,
    pub name: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 key pair used to issue and verify session tokens.
///
/// This replaces the original client-only "isAuthenticated" flag: the
/// frontend stores the signed token and the backend verifies it on every
/// protected request.
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl std::fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionKeys").finish_non_exhaustive()
    }
}

impl SessionKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a signed token for the given user.
    pub fn issue(&self, user: &model::entities::user::Model) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            sub: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            iat: now,
            exp: now + SESSION_TTL_SECS,
        };

        let token =
            encode(&Header::default(), &claims, &self.encoding).map_err(AuthError::Signing)?;
        debug!(user_id = user.id, "issued session token");
        Ok(token)
    }

    /// Verify a token's signature and expiry, returning its claims.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AuthError> {
        decode::<SessionClaims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_user() -> model::entities::user::Model {
        model::entities::user::Model {
            id: 7,
            name: "Asha Rao".to_string(),
            mobile_number: "9876543210".to_string(),
            age: 27,
            email: "asha@example.com".to_string(),
            password_hash: "irrelevant".to_string(),
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn issued_token_verifies_with_same_secret() {
        let keys = SessionKeys::new("unit-test-secret");
        let token = keys.issue(&sample_user()).unwrap();
        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.email, "asha@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let keys = SessionKeys::new("unit-test-secret");
        let other = SessionKeys::new("a-different-secret");
        let token = other.issue(&sample_user()).unwrap();
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        let keys = SessionKeys::new("unit-test-secret");
        assert!(keys.verify("not-a-token").is_err());
    }
}
