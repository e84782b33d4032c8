use dl_core::Comment;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct CommentDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub author_name: String,
    pub author_avatar: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            user_id: comment.user_id,
            text: comment.text,
            author_name: comment.author_name,
            author_avatar: comment.author_avatar,
            created_at: comment.created_at,
        }
    }
}
