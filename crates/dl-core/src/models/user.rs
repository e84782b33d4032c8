//! User entity - the identity every other aggregate hangs off.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Unique; normalized for avatar derivation only, stored as supplied.
    pub email: String,
    /// PHC-format argon2 hash. Never exposed through the API.
    pub password_hash: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user, deriving the avatar reference from the email.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let avatar = avatar_url(&email);
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            avatar,
            created_at: Utc::now(),
        }
    }
}

/// Gravatar-style avatar URL from the SHA-256 hex digest of the trimmed,
/// lowercased address.
pub fn avatar_url(email: &str) -> String {
    let digest = Sha256::digest(email.trim().to_lowercase().as_bytes());
    let hash: String = digest.iter().map(|byte| format!("{byte:02x}")).collect();
    format!("https://www.gravatar.com/avatar/{hash}?s=200&d=mm")
}
