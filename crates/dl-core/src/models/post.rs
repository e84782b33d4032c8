use crate::models::comment::Comment;
use crate::models::user::User;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A post aggregate: the text plus its embedded likes set and comments
/// sequence. Mutations load the whole aggregate and write it back whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub author_name: String,
    pub author_avatar: String,
    /// User ids, unique, newest first.
    pub likes: Vec<Uuid>,
    /// Newest first.
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Author name and avatar are captured at creation and never re-synced.
    pub fn new(author: &User, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: author.id,
            text,
            author_name: author.name.clone(),
            author_avatar: author.avatar.clone(),
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
