use crate::CommentDto;

use serde::Serialize;

/// The post's comments sequence after a mutation, newest first.
#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<CommentDto>,
}
