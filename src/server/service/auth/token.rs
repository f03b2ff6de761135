//! Signed session tokens.
//!
//! Sessions are stateless: the cookie carries an HS256 JWT whose claims identify the
//! user. Verification checks the signature and the expiry with no leeway; any failure
//! yields `None` rather than a distinguishable error.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{internal::InternalError, AppError};

/// Lifetime of a session token and of the cookie that carries it.
pub const SESSION_TTL_DAYS: i64 = 7;

/// Identity carried by a valid session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub user_id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    sub: String,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    iat: i64,
    exp: i64,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Issues and verifies session tokens with a shared HMAC secret.
#[derive(Clone)]
pub struct TokenService {
    keys: Arc<Keys>,
}

impl TokenService {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
            }),
        }
    }

    /// Issues a token for `identity` valid for [`SESSION_TTL_DAYS`] from now.
    pub fn issue(&self, identity: &SessionIdentity) -> Result<String, AppError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issues a token as if it were minted at `issued_at`.
    pub fn issue_at(
        &self,
        identity: &SessionIdentity,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let claims = Claims {
            sub: identity.user_id.clone(),
            email: identity.email.clone(),
            first_name: identity.first_name.clone(),
            last_name: identity.last_name.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::days(SESSION_TTL_DAYS)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(|e| InternalError::TokenSigning(e).into())
    }

    /// Verifies a token and returns the identity it carries.
    ///
    /// Returns `None` for bad signatures, expired tokens and malformed input alike.
    pub fn verify(&self, token: &str) -> Option<SessionIdentity> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        match decode::<Claims>(token, &self.keys.decoding, &validation) {
            Ok(data) => Some(SessionIdentity {
                user_id: data.claims.sub,
                email: data.claims.email,
                first_name: data.claims.first_name,
                last_name: data.claims.last_name,
            }),
            Err(e) => {
                tracing::debug!("Rejected session token: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

    fn identity() -> SessionIdentity {
        SessionIdentity {
            user_id: "user-1".to_string(),
            email: "alice@example.com".to_string(),
            first_name: Some("Alice".to_string()),
            last_name: None,
        }
    }

    #[test]
    fn verifies_issued_token() {
        let service = TokenService::new(SECRET);
        let token = service.issue(&identity()).unwrap();

        assert_eq!(service.verify(&token), Some(identity()));
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let token = TokenService::new(b"another-secret-another-secret-xx")
            .issue(&identity())
            .unwrap();

        assert_eq!(TokenService::new(SECRET).verify(&token), None);
    }

    #[test]
    fn rejects_expired_token() {
        let service = TokenService::new(SECRET);
        let issued_at = Utc::now() - Duration::days(SESSION_TTL_DAYS) - Duration::seconds(5);
        let token = service.issue_at(&identity(), issued_at).unwrap();

        assert_eq!(service.verify(&token), None);
    }

    #[test]
    fn accepts_token_near_end_of_lifetime() {
        let service = TokenService::new(SECRET);
        let issued_at = Utc::now() - Duration::days(SESSION_TTL_DAYS) + Duration::minutes(1);
        let token = service.issue_at(&identity(), issued_at).unwrap();

        assert!(service.verify(&token).is_some());
    }

    #[test]
    fn rejects_garbage() {
        let service = TokenService::new(SECRET);

        assert_eq!(service.verify(""), None);
        assert_eq!(service.verify("not.a.token"), None);
    }

    #[test]
    fn rejects_tampered_token() {
        let service = TokenService::new(SECRET);
        let mut token = service.issue(&identity()).unwrap();
        token.push('x');

        assert_eq!(service.verify(&token), None);
    }
}
