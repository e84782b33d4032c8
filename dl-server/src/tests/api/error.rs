use crate::ApiError;

use dl_auth::AuthError;
use dl_core::{CoreError, ErrorLocation};

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[test]
fn given_each_error_kind_when_rendered_then_status_matches_taxonomy() {
    let cases = [
        (
            ApiError::Unauthenticated {
                message: "No token, authorization denied".into(),
                location: here(),
            },
            StatusCode::UNAUTHORIZED,
        ),
        (
            ApiError::Forbidden {
                message: "User not authorized".into(),
                location: here(),
            },
            StatusCode::FORBIDDEN,
        ),
        (
            ApiError::NotFound {
                message: "Post not found".into(),
                location: here(),
            },
            StatusCode::NOT_FOUND,
        ),
        (
            ApiError::Validation {
                message: "Text is required".into(),
                field: Some("text".into()),
                location: here(),
            },
            StatusCode::BAD_REQUEST,
        ),
        (
            ApiError::Conflict {
                message: "Post already liked".into(),
                location: here(),
            },
            StatusCode::CONFLICT,
        ),
        (
            ApiError::Internal {
                message: "Database operation failed".into(),
                location: here(),
            },
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected) in cases {
        let response = error.into_response();
        assert_eq!(response.status(), expected);
    }
}

#[test]
fn given_missing_token_when_converted_then_message_names_the_absence() {
    let error: ApiError = AuthError::MissingToken { location: here() }.into();

    assert!(matches!(
        &error,
        ApiError::Unauthenticated { message, .. } if message == "No token, authorization denied"
    ));
}

#[test]
fn given_any_verification_failure_when_converted_then_message_is_uniform() {
    let expired: ApiError = AuthError::TokenExpired { location: here() }.into();
    let invalid_claim: ApiError = AuthError::InvalidClaim {
        claim: "sub".into(),
        message: "sub (user id) cannot be empty".into(),
        location: here(),
    }
    .into();

    for error in [expired, invalid_claim] {
        assert!(matches!(
            &error,
            ApiError::Unauthenticated { message, .. } if message == "Token is not valid"
        ));
    }
}

#[test]
fn given_ownership_denial_when_converted_then_forbidden_not_unauthenticated() {
    let error: ApiError = CoreError::NotOwner {
        caller: Uuid::new_v4(),
        location: here(),
    }
    .into();

    assert!(matches!(error, ApiError::Forbidden { .. }));
}

#[test]
fn given_membership_conflicts_when_converted_then_conflict_with_like_wording() {
    let duplicate: ApiError = CoreError::DuplicateMember {
        member: Uuid::new_v4(),
        location: here(),
    }
    .into();
    let absent: ApiError = CoreError::MemberNotPresent {
        member: Uuid::new_v4(),
        location: here(),
    }
    .into();

    assert!(matches!(
        &duplicate,
        ApiError::Conflict { message, .. } if message == "Post already liked"
    ));
    assert!(matches!(
        &absent,
        ApiError::Conflict { message, .. } if message == "Post has not yet been liked"
    ));
}
