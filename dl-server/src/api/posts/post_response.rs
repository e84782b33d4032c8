use crate::PostDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub post: PostDto,
}
