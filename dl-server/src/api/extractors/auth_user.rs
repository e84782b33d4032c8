//! Axum extractor for the session-token authentication gate

use crate::api::state::AppState;
use crate::ApiError;

use dl_auth::AuthError;
use dl_core::ErrorLocation;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

/// The authenticated caller, extracted from the `x-auth-token` header.
///
/// Runs before the handler body, so an authentication failure
/// short-circuits before any resource lookup. This gate answers only
/// "who is calling" - ownership checks live elsewhere.
pub struct AuthUser(pub Uuid);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = parts
                .headers
                .get("x-auth-token")
                .and_then(|value| value.to_str().ok())
                .ok_or_else(|| AuthError::MissingToken {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let claims = state.jwt_validator.validate(token)?;
            let user_id = claims.user_id()?;

            Ok(AuthUser(user_id))
        }
    }
}
