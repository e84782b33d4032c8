//! Registration and login handlers - the only places tokens are issued

use crate::api::auth::password::{hash_password, verify_password};
use crate::api::state::AppState;
use crate::{ApiError, ApiResult, AuthUser, LoginRequest, RegisterRequest, TokenResponse, UserResponse};

use dl_core::{ErrorLocation, User};
use dl_db::UserRepository;

use std::panic::Location;

use axum::{extract::State, Json};

/// POST /api/users
///
/// Register a new account and return a session token.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<TokenResponse>> {
    if req.name.trim().is_empty() {
        return Err(ApiError::missing_field("name", "Name is required"));
    }
    if req.email.trim().is_empty() || !req.email.contains('@') {
        return Err(ApiError::missing_field(
            "email",
            "Please include a valid email",
        ));
    }
    if req.password.len() < 6 {
        return Err(ApiError::missing_field(
            "password",
            "Please enter a password with 6 or more characters",
        ));
    }

    let repo = UserRepository::new(state.pool.clone());
    if repo.find_by_email(&req.email).await?.is_some() {
        return Err(ApiError::Conflict {
            message: "User already exists".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let password_hash = hash_password(&req.password).map_err(|e| {
        log::error!("Password hashing failed: {}", e);
        ApiError::Internal {
            message: "Failed to process credentials".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    let user = User::new(req.name, req.email, password_hash);
    repo.create(&user).await?;

    let token = state.token_issuer.issue(user.id)?;

    log::info!("Registered user {}", user.id);

    Ok(Json(TokenResponse { token }))
}

/// POST /api/auth
///
/// Authenticate with email and password and receive a session token.
/// Unknown email and wrong password answer identically.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    if req.email.trim().is_empty() {
        return Err(ApiError::missing_field(
            "email",
            "Please include a valid email",
        ));
    }
    if req.password.is_empty() {
        return Err(ApiError::missing_field("password", "Password is required"));
    }

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_email(&req.email)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !verify_password(&req.password, &user.password_hash) {
        return Err(invalid_credentials());
    }

    let token = state.token_issuer.issue(user.id)?;

    Ok(Json(TokenResponse { token }))
}

/// GET /api/auth
///
/// The authenticated caller's own user record.
pub async fn current_user(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let user = UserRepository::new(state.pool.clone())
        .find_by_id(caller)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: "User not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(UserResponse { user: user.into() }))
}

#[track_caller]
fn invalid_credentials() -> ApiError {
    ApiError::Validation {
        message: "Invalid credentials".to_string(),
        field: None,
        location: ErrorLocation::from(Location::caller()),
    }
}
