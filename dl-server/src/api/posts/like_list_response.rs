use serde::Serialize;
use uuid::Uuid;

/// The post's likes set after a like/unlike, newest first.
#[derive(Debug, Serialize)]
pub struct LikeListResponse {
    pub likes: Vec<Uuid>,
}
