use crate::PostDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PostDto>,
}
