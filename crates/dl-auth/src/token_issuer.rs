use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::{Duration, Utc};
use dl_core::ErrorLocation;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use uuid::Uuid;

/// Issues signed session tokens.
///
/// The signing secret and expiry horizon are injected once at construction;
/// nothing here reads ambient configuration.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create issuer with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8], ttl_hours: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl: Duration::hours(ttl_hours as i64),
        }
    }

    /// Issue a token asserting `user_id`, expiring after the configured TTL.
    #[track_caller]
    pub fn issue(&self, user_id: Uuid) -> AuthErrorResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::TokenIssue {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
