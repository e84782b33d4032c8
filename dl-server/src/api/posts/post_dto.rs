use crate::CommentDto;

use dl_core::Post;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct PostDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub author_name: String,
    pub author_avatar: String,
    pub likes: Vec<Uuid>,
    pub comments: Vec<CommentDto>,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            text: post.text,
            author_name: post.author_name,
            author_avatar: post.author_avatar,
            likes: post.likes,
            comments: post.comments.into_iter().map(CommentDto::from).collect(),
            created_at: post.created_at,
        }
    }
}
