mod common;

use akaa_site::config::JwtConfig;
use akaa_site::util::jwt::*;
use chrono::Utc;
use common::{mint_token, mint_token_with, user_id};

fn create_test_jwt_utils() -> JwtTokenUtilsImpl {
    JwtTokenUtilsImpl::new(JwtConfig::default())
}

#[test]
fn test_valid_token_yields_identity() {
    let jwt_utils = create_test_jwt_utils();
    let token = mint_token(user_id(), "jean@example.com");

    let claims = jwt_utils.validate_access_token(&token).unwrap();
    assert_eq!(claims.sub, user_id().to_string());
    assert_eq!(claims.role.as_deref(), Some("authenticated"));

    let identity = jwt_utils.identity_from_token(&token).unwrap();
    assert_eq!(identity.id, user_id());
    assert_eq!(identity.email.as_deref(), Some("jean@example.com"));
}

#[test]
fn test_expired_token_rejected() {
    let jwt_utils = create_test_jwt_utils();
    let token = mint_token_with(user_id(), "jean@example.com", "authenticated", Utc::now().timestamp() - 3600);
    assert!(matches!(jwt_utils.validate_access_token(&token), Err(JwtError::TokenExpired)));
}

#[test]
fn test_wrong_audience_rejected() {
    let jwt_utils = create_test_jwt_utils();
    let token = mint_token_with(user_id(), "jean@example.com", "anon", Utc::now().timestamp() + 3600);
    assert!(matches!(jwt_utils.validate_access_token(&token), Err(JwtError::DecodingFailed(_))));
}

#[test]
fn test_wrong_secret_rejected() {
    let other = JwtTokenUtilsImpl::new(JwtConfig {
        jwt_secret: "another_secret_that_is_also_long_enough_to_pass".to_string(),
        ..JwtConfig::default()
    });
    let token = mint_token(user_id(), "jean@example.com");
    assert!(other.validate_access_token(&token).is_err());
}

#[test]
fn test_issuer_checked_when_configured() {
    let jwt_utils = JwtTokenUtilsImpl::new(JwtConfig {
        jwt_issuer: Some("https://project.example/auth/v1".to_string()),
        ..JwtConfig::default()
    });
    // minted without an iss claim
    let token = mint_token(user_id(), "jean@example.com");
    assert!(jwt_utils.validate_access_token(&token).is_err());
}

#[test]
fn test_malformed_token_rejected() {
    let jwt_utils = create_test_jwt_utils();
    assert!(jwt_utils.validate_access_token("not.a.token").is_err());
    assert!(jwt_utils.identity_from_token("").is_err());
}

#[test]
fn test_extract_token_from_header() {
    let jwt_utils = create_test_jwt_utils();
    assert_eq!(jwt_utils.extract_token_from_header("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
    assert!(matches!(jwt_utils.extract_token_from_header("Basic xyz"), Err(JwtError::InvalidToken)));
    assert!(matches!(jwt_utils.extract_token_from_header("Bearer   "), Err(JwtError::InvalidToken)));
}
