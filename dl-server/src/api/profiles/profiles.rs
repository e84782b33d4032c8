//! Profile REST API handlers
//!
//! The caller's profile is always looked up by the authenticated id, so
//! nested experience/education mutations cannot reach another user's data.

use crate::api::state::AppState;
use crate::{
    AddEducationRequest, AddExperienceRequest, ApiError, ApiResult, AuthUser, DeleteResponse,
    ProfileDto, ProfileListResponse, ProfileResponse, UpsertProfileRequest,
};

use dl_core::{collection, Education, ErrorLocation, Experience, Profile, User};
use dl_db::{PostRepository, ProfileRepository, UserRepository};

use std::panic::Location;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

/// GET /api/profiles/me
pub async fn my_profile(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = ProfileRepository::new(state.pool.clone())
        .find_by_user(caller)
        .await?
        .ok_or_else(no_profile)?;
    let owner = load_owner(&state, caller).await?;

    Ok(Json(ProfileResponse {
        profile: ProfileDto::new(profile, &owner),
    }))
}

/// POST /api/profiles
///
/// Create or update the caller's profile. Overwrite-merge: only supplied
/// fields replace stored values.
pub async fn upsert_profile(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Json(req): Json<UpsertProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let owner = load_owner(&state, caller).await?;
    let update = req.into_update();

    let repo = ProfileRepository::new(state.pool.clone());
    let profile = match repo.find_by_user(caller).await? {
        Some(mut profile) => {
            profile.apply(update);
            profile.updated_at = Utc::now();
            repo.update(&profile).await?;
            profile
        }
        None => {
            let mut profile = Profile::new(caller);
            profile.apply(update);
            repo.create(&profile).await?;
            log::info!("Created profile for user {}", caller);
            profile
        }
    };

    Ok(Json(ProfileResponse {
        profile: ProfileDto::new(profile, &owner),
    }))
}

/// GET /api/profiles
///
/// All profiles, each joined with the owner's name and avatar. Public.
pub async fn list_profiles(State(state): State<AppState>) -> ApiResult<Json<ProfileListResponse>> {
    let users = UserRepository::new(state.pool.clone());
    let profiles = ProfileRepository::new(state.pool.clone()).find_all().await?;

    let mut dtos = Vec::with_capacity(profiles.len());
    for profile in profiles {
        let Some(owner) = users.find_by_id(profile.user_id).await? else {
            log::warn!("Profile {} has no user row, skipping", profile.user_id);
            continue;
        };
        dtos.push(ProfileDto::new(profile, &owner));
    }

    Ok(Json(ProfileListResponse { profiles: dtos }))
}

/// GET /api/profiles/user/{user_id}
///
/// A profile by its owner's id. Public.
pub async fn profile_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let user_id = Uuid::parse_str(&user_id).map_err(|_| profile_not_found())?;

    let profile = ProfileRepository::new(state.pool.clone())
        .find_by_user(user_id)
        .await?
        .ok_or_else(profile_not_found)?;
    let owner = load_owner(&state, user_id).await?;

    Ok(Json(ProfileResponse {
        profile: ProfileDto::new(profile, &owner),
    }))
}

/// DELETE /api/profiles
///
/// Delete the caller's account: posts, then profile, then the user row.
/// Best-effort sequential - a failure partway leaves earlier steps done.
pub async fn delete_account(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> ApiResult<Json<DeleteResponse>> {
    let removed_posts = PostRepository::new(state.pool.clone())
        .delete_by_user(caller)
        .await?;
    ProfileRepository::new(state.pool.clone())
        .delete_by_user(caller)
        .await?;
    UserRepository::new(state.pool.clone()).delete(caller).await?;

    log::info!("Deleted account {} ({} posts removed)", caller, removed_posts);

    Ok(Json(DeleteResponse {
        deleted_id: caller.to_string(),
    }))
}

/// PUT /api/profiles/experience
pub async fn add_experience(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Json(req): Json<AddExperienceRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    if req.title.trim().is_empty() {
        return Err(ApiError::missing_field("title", "Title is required"));
    }
    if req.company.trim().is_empty() {
        return Err(ApiError::missing_field("company", "Company is required"));
    }
    let from = require_from_date(req.from)?;

    let repo = ProfileRepository::new(state.pool.clone());
    let mut profile = repo.find_by_user(caller).await?.ok_or_else(no_profile)?;

    let entry = Experience::new(
        req.title,
        req.company,
        req.location,
        from,
        req.to,
        req.current,
        req.description,
    );
    collection::insert_front(&mut profile.experience, entry);
    profile.updated_at = Utc::now();
    repo.update(&profile).await?;

    let owner = load_owner(&state, caller).await?;
    Ok(Json(ProfileResponse {
        profile: ProfileDto::new(profile, &owner),
    }))
}

/// DELETE /api/profiles/experience/{exp_id}
///
/// Lenient delete: an unknown identifier leaves the sequence unchanged
/// and still answers with the (unmodified) profile.
pub async fn delete_experience(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(exp_id): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let repo = ProfileRepository::new(state.pool.clone());
    let mut profile = repo.find_by_user(caller).await?.ok_or_else(no_profile)?;

    let removed = Uuid::parse_str(&exp_id)
        .map(|id| collection::remove_by_key(&mut profile.experience, id))
        .unwrap_or(false);
    if removed {
        profile.updated_at = Utc::now();
    }
    repo.update(&profile).await?;

    let owner = load_owner(&state, caller).await?;
    Ok(Json(ProfileResponse {
        profile: ProfileDto::new(profile, &owner),
    }))
}

/// PUT /api/profiles/education
pub async fn add_education(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Json(req): Json<AddEducationRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    if req.school.trim().is_empty() {
        return Err(ApiError::missing_field("school", "School is required"));
    }
    if req.degree.trim().is_empty() {
        return Err(ApiError::missing_field("degree", "Degree is required"));
    }
    if req.field_of_study.trim().is_empty() {
        return Err(ApiError::missing_field(
            "field_of_study",
            "Field of Study is required",
        ));
    }
    let from = require_from_date(req.from)?;

    let repo = ProfileRepository::new(state.pool.clone());
    let mut profile = repo.find_by_user(caller).await?.ok_or_else(no_profile)?;

    let entry = Education::new(
        req.school,
        req.degree,
        req.field_of_study,
        from,
        req.to,
        req.current,
        req.description,
    );
    collection::insert_front(&mut profile.education, entry);
    profile.updated_at = Utc::now();
    repo.update(&profile).await?;

    let owner = load_owner(&state, caller).await?;
    Ok(Json(ProfileResponse {
        profile: ProfileDto::new(profile, &owner),
    }))
}

/// DELETE /api/profiles/education/{edu_id}
pub async fn delete_education(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(edu_id): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let repo = ProfileRepository::new(state.pool.clone());
    let mut profile = repo.find_by_user(caller).await?.ok_or_else(no_profile)?;

    let removed = Uuid::parse_str(&edu_id)
        .map(|id| collection::remove_by_key(&mut profile.education, id))
        .unwrap_or(false);
    if removed {
        profile.updated_at = Utc::now();
    }
    repo.update(&profile).await?;

    let owner = load_owner(&state, caller).await?;
    Ok(Json(ProfileResponse {
        profile: ProfileDto::new(profile, &owner),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

async fn load_owner(state: &AppState, user_id: Uuid) -> ApiResult<User> {
    UserRepository::new(state.pool.clone())
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: "User not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

#[track_caller]
fn require_from_date(from: Option<NaiveDate>) -> ApiResult<NaiveDate> {
    from.ok_or_else(|| ApiError::missing_field("from", "From date is required"))
}

#[track_caller]
fn no_profile() -> ApiError {
    ApiError::NotFound {
        message: "There is no profile for this user".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
fn profile_not_found() -> ApiError {
    ApiError::NotFound {
        message: "Profile not found".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
