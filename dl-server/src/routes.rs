use crate::api::auth::auth;
use crate::api::posts::posts;
use crate::api::profiles::profiles;
use crate::api::state::AppState;
use crate::health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Registration and login
        .route("/api/users", post(auth::register))
        .route("/api/auth", post(auth::login).get(auth::current_user))
        // Profiles
        .route(
            "/api/profiles",
            post(profiles::upsert_profile)
                .get(profiles::list_profiles)
                .delete(profiles::delete_account),
        )
        .route("/api/profiles/me", get(profiles::my_profile))
        .route("/api/profiles/user/{user_id}", get(profiles::profile_by_user))
        .route("/api/profiles/experience", put(profiles::add_experience))
        .route(
            "/api/profiles/experience/{exp_id}",
            delete(profiles::delete_experience),
        )
        .route("/api/profiles/education", put(profiles::add_education))
        .route(
            "/api/profiles/education/{edu_id}",
            delete(profiles::delete_education),
        )
        // Posts
        .route("/api/posts", post(posts::create_post).get(posts::list_posts))
        .route("/api/posts/{id}", get(posts::get_post).delete(posts::delete_post))
        .route("/api/posts/like/{id}", put(posts::like_post))
        .route("/api/posts/unlike/{id}", put(posts::unlike_post))
        .route("/api/posts/comment/{id}", post(posts::add_comment))
        .route(
            "/api/posts/comment/{id}/{comment_id}",
            delete(posts::delete_comment),
        )
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
