use crate::collection::Keyed;
use crate::models::user::User;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A comment embedded in a post. Deletable only by its author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    /// The commenter, not the post's owner.
    pub user_id: Uuid,
    pub text: String,
    pub author_name: String,
    pub author_avatar: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Author name and avatar are captured at creation and never re-synced.
    pub fn new(author: &User, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: author.id,
            text,
            author_name: author.name.clone(),
            author_avatar: author.avatar.clone(),
            created_at: Utc::now(),
        }
    }
}

impl Keyed for Comment {
    fn key(&self) -> Uuid {
        self.id
    }
}
