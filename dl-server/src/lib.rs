pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    auth::{
        auth::{current_user, login, register},
        login_request::LoginRequest,
        register_request::RegisterRequest,
        token_response::TokenResponse,
        user_dto::UserDto,
        user_response::UserResponse,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_user::AuthUser,
    posts::{
        add_comment_request::AddCommentRequest,
        comment_dto::CommentDto,
        comment_list_response::CommentListResponse,
        create_post_request::CreatePostRequest,
        like_list_response::LikeListResponse,
        post_dto::PostDto,
        post_list_response::PostListResponse,
        post_response::PostResponse,
        posts::{
            add_comment, create_post, delete_comment, delete_post, get_post, like_post,
            list_posts, unlike_post,
        },
    },
    profiles::{
        add_education_request::AddEducationRequest,
        add_experience_request::AddExperienceRequest,
        profile_dto::ProfileDto,
        profile_list_response::ProfileListResponse,
        profile_response::ProfileResponse,
        profiles::{
            add_education, add_experience, delete_account, delete_education, delete_experience,
            list_profiles, my_profile, profile_by_user, upsert_profile,
        },
        upsert_profile_request::UpsertProfileRequest,
    },
    state::AppState,
};

pub use crate::routes::build_router;

#[cfg(test)]
mod tests;
