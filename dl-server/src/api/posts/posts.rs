//! Post REST API handlers
//!
//! Likes and comments are embedded in the post aggregate: each mutation
//! loads the post, applies a pure collection edit, and writes the whole
//! aggregate back. Concurrent mutations of one post can race; the later
//! write-back wins (documented baseline).

use crate::api::state::AppState;
use crate::{
    AddCommentRequest, ApiError, ApiResult, AuthUser, CommentListResponse, CreatePostRequest,
    DeleteResponse, LikeListResponse, PostDto, PostListResponse, PostResponse,
};

use dl_core::{collection, policy, Comment, ErrorLocation, Post, User};
use dl_db::{PostRepository, UserRepository};

use std::panic::Location;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

/// POST /api/posts
///
/// Create a post, capturing the caller's name and avatar as they are now.
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Json(req): Json<CreatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    if req.text.trim().is_empty() {
        return Err(ApiError::missing_field("text", "Text is required"));
    }

    let author = load_user(&state, caller).await?;
    let post = Post::new(&author, req.text);
    PostRepository::new(state.pool.clone()).create(&post).await?;

    log::info!("Created post {} by user {}", post.id, caller);

    Ok(Json(PostResponse { post: post.into() }))
}

/// GET /api/posts
///
/// All posts, newest first. Like every post route, requires a session.
pub async fn list_posts(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
) -> ApiResult<Json<PostListResponse>> {
    let posts = PostRepository::new(state.pool.clone()).find_all().await?;

    Ok(Json(PostListResponse {
        posts: posts.into_iter().map(PostDto::from).collect(),
    }))
}

/// GET /api/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<PostResponse>> {
    let post = load_post(&state, &id).await?;

    Ok(Json(PostResponse { post: post.into() }))
}

/// DELETE /api/posts/{id}
///
/// Only the post's owner may delete it.
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let post = load_post(&state, &id).await?;

    policy::ensure_owner(post.user_id, caller)?;

    PostRepository::new(state.pool.clone()).delete(post.id).await?;

    log::info!("Deleted post {} by user {}", post.id, caller);

    Ok(Json(DeleteResponse {
        deleted_id: post.id.to_string(),
    }))
}

/// PUT /api/posts/like/{id}
///
/// Idempotency guard, not an upsert: liking twice answers 409.
pub async fn like_post(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<LikeListResponse>> {
    let mut post = load_post(&state, &id).await?;

    collection::add_member(&mut post.likes, caller)?;
    PostRepository::new(state.pool.clone()).update(&post).await?;

    Ok(Json(LikeListResponse { likes: post.likes }))
}

/// PUT /api/posts/unlike/{id}
pub async fn unlike_post(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<LikeListResponse>> {
    let mut post = load_post(&state, &id).await?;

    collection::remove_member(&mut post.likes, caller)?;
    PostRepository::new(state.pool.clone()).update(&post).await?;

    Ok(Json(LikeListResponse { likes: post.likes }))
}

/// POST /api/posts/comment/{id}
pub async fn add_comment(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<String>,
    Json(req): Json<AddCommentRequest>,
) -> ApiResult<Json<CommentListResponse>> {
    if req.text.trim().is_empty() {
        return Err(ApiError::missing_field("text", "Text is required"));
    }

    let commenter = load_user(&state, caller).await?;
    let mut post = load_post(&state, &id).await?;

    let comment = Comment::new(&commenter, req.text);
    collection::insert_front(&mut post.comments, comment);
    PostRepository::new(state.pool.clone()).update(&post).await?;

    Ok(Json(CommentListResponse {
        comments: post.comments.into_iter().map(Into::into).collect(),
    }))
}

/// DELETE /api/posts/comment/{id}/{comment_id}
///
/// Ownership is checked against the comment's author: a commenter may
/// remove their own comment from anyone's post, and the post's owner
/// cannot remove someone else's.
pub async fn delete_comment(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path((id, comment_id)): Path<(String, String)>,
) -> ApiResult<Json<CommentListResponse>> {
    let mut post = load_post(&state, &id).await?;

    let comment_id = Uuid::parse_str(&comment_id).map_err(|_| comment_not_found())?;
    let comment = post
        .comments
        .iter()
        .find(|comment| comment.id == comment_id)
        .ok_or_else(comment_not_found)?;

    policy::ensure_owner(comment.user_id, caller)?;

    collection::remove_by_key(&mut post.comments, comment_id);
    PostRepository::new(state.pool.clone()).update(&post).await?;

    Ok(Json(CommentListResponse {
        comments: post.comments.into_iter().map(Into::into).collect(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

async fn load_user(state: &AppState, user_id: Uuid) -> ApiResult<User> {
    UserRepository::new(state.pool.clone())
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: "User not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// A malformed id answers the same as an absent post.
async fn load_post(state: &AppState, raw_id: &str) -> ApiResult<Post> {
    let id = Uuid::parse_str(raw_id).map_err(|_| post_not_found())?;

    PostRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(post_not_found)
}

#[track_caller]
fn post_not_found() -> ApiError {
    ApiError::NotFound {
        message: "Post not found".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
fn comment_not_found() -> ApiError {
    ApiError::NotFound {
        message: "Comment does not exist".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
