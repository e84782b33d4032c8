use crate::{AuthError, Claims, JwtValidator, TokenIssuer};

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use uuid::Uuid;

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

fn create_test_token(claims: &Claims, secret: &[u8]) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

fn valid_claims() -> Claims {
    Claims {
        sub: Uuid::new_v4().to_string(),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
    }
}

#[test]
fn given_valid_token_when_validated_then_returns_claims() {
    let validator = JwtValidator::with_hs256(SECRET);
    let claims = valid_claims();
    let token = create_test_token(&claims, SECRET);

    let result = validator.validate(&token);

    assert!(result.is_ok());
    let validated = result.unwrap();
    assert_eq!(validated.sub, claims.sub);
}

#[test]
fn given_expired_token_when_validated_then_returns_token_expired_error() {
    let validator = JwtValidator::with_hs256(SECRET);
    let mut claims = valid_claims();
    claims.exp = chrono::Utc::now().timestamp() - 3600; // Expired 1 hour ago
    let token = create_test_token(&claims, SECRET);

    let result = validator.validate(&token);

    // Expiry wins regardless of the signature being valid
    assert!(matches!(result, Err(AuthError::TokenExpired { .. })));
}

#[test]
fn given_wrong_secret_when_validated_then_returns_decode_error() {
    let wrong_secret = b"wrong-secret-key-at-least-32-by";
    let validator = JwtValidator::with_hs256(wrong_secret);
    let claims = valid_claims();
    let token = create_test_token(&claims, SECRET);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::JwtDecode { .. })));
}

#[test]
fn given_garbage_token_when_validated_then_returns_decode_error() {
    let validator = JwtValidator::with_hs256(SECRET);

    let result = validator.validate("not-a-jwt");

    assert!(matches!(result, Err(AuthError::JwtDecode { .. })));
}

#[test]
fn given_empty_subject_when_validated_then_returns_invalid_claim_error() {
    let validator = JwtValidator::with_hs256(SECRET);
    let mut claims = valid_claims();
    claims.sub = String::new();
    let token = create_test_token(&claims, SECRET);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::InvalidClaim { .. })));
}

#[test]
fn given_issued_token_when_validated_then_round_trips_the_user_id() {
    let issuer = TokenIssuer::with_hs256(SECRET, 24);
    let validator = JwtValidator::with_hs256(SECRET);
    let user_id = Uuid::new_v4();

    let token = issuer.issue(user_id).unwrap();
    let claims = validator.validate(&token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert!(claims.exp > claims.iat);
}

#[test]
fn given_verified_identity_when_reissued_then_new_token_verifies_again() {
    let issuer = TokenIssuer::with_hs256(SECRET, 24);
    let validator = JwtValidator::with_hs256(SECRET);
    let user_id = Uuid::new_v4();

    let first = issuer.issue(user_id).unwrap();
    let claims = validator.validate(&first).unwrap();
    let second = issuer.issue(claims.user_id().unwrap()).unwrap();

    let reclaims = validator.validate(&second).unwrap();
    assert_eq!(reclaims.user_id().unwrap(), user_id);
}

#[test]
fn given_non_uuid_subject_when_resolving_user_id_then_invalid_claim() {
    let claims = Claims {
        sub: "not-a-uuid".to_string(),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
    };

    assert!(matches!(
        claims.user_id(),
        Err(AuthError::InvalidClaim { .. })
    ));
}
