mod common;

use akaa_site::model::notification::NotificationVariant;
use akaa_site::repository::repository_error::RepositoryError;
use akaa_site::service::auth_service::{
    classify_auth_error, AuthFailureKind, ALREADY_REGISTERED_TEXT, EMAIL_NOT_CONFIRMED_TEXT, INVALID_CREDENTIALS_TEXT,
};
use akaa_site::util::backend::parse_api_error;
use common::api_error;

#[test]
fn test_error_code_takes_precedence() {
    let failure = classify_auth_error(&api_error(400, Some("invalid_credentials"), "something reworded"));
    assert_eq!(failure.kind, AuthFailureKind::InvalidCredentials);

    let failure = classify_auth_error(&api_error(400, Some("email_not_confirmed"), "whatever"));
    assert_eq!(failure.kind, AuthFailureKind::EmailNotConfirmed);

    for code in ["user_already_exists", "email_exists"] {
        let failure = classify_auth_error(&api_error(422, Some(code), "whatever"));
        assert_eq!(failure.kind, AuthFailureKind::AlreadyRegistered);
    }
}

#[test]
fn test_message_fallback_fixtures() {
    assert_eq!(INVALID_CREDENTIALS_TEXT, "Invalid login credentials");
    assert_eq!(EMAIL_NOT_CONFIRMED_TEXT, "Email not confirmed");
    assert_eq!(ALREADY_REGISTERED_TEXT, "User already registered");

    let cases = [
        ("Invalid login credentials", AuthFailureKind::InvalidCredentials),
        ("Email not confirmed", AuthFailureKind::EmailNotConfirmed),
        ("User already registered", AuthFailureKind::AlreadyRegistered),
        ("Password should be at least 6 characters", AuthFailureKind::Other),
    ];
    for (message, kind) in cases {
        assert_eq!(classify_auth_error(&api_error(400, None, message)).kind, kind, "{}", message);
    }
}

#[test]
fn test_unknown_code_falls_back_to_message() {
    let failure = classify_auth_error(&api_error(400, Some("unexpected_failure"), "Email not confirmed"));
    assert_eq!(failure.kind, AuthFailureKind::EmailNotConfirmed);
}

#[test]
fn test_notifications() {
    let n = classify_auth_error(&api_error(400, None, "Invalid login credentials")).notification();
    assert_eq!(n.title, "Erreur de connexion");
    assert_eq!(n.description, "Email ou mot de passe incorrect");
    assert_eq!(n.variant, NotificationVariant::Destructive);

    let n = classify_auth_error(&api_error(400, None, "Email not confirmed")).notification();
    assert_eq!(n.title, "Email non confirmé");
    assert_eq!(n.description, "Veuillez confirmer votre email avant de vous connecter");

    let n = classify_auth_error(&api_error(400, None, "User already registered")).notification();
    assert_eq!(n.title, "Compte existant");
    assert_eq!(n.description, "Un compte existe déjà avec cet email. Connectez-vous.");

    let n = classify_auth_error(&api_error(429, None, "Email rate limit exceeded")).notification();
    assert_eq!(n.title, "Erreur");
    assert_eq!(n.description, "Email rate limit exceeded");
    assert!(n.is_destructive());
}

#[test]
fn test_parse_auth_error_body() {
    let err = parse_api_error(
        400,
        r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#,
    );
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.code(), Some("invalid_credentials"));
    assert_eq!(err.message(), "Invalid login credentials");
}

#[test]
fn test_parse_oauth_style_error_body() {
    let err = parse_api_error(400, r#"{"error":"invalid_grant","error_description":"Email not confirmed"}"#);
    assert_eq!(err.code(), None);
    assert_eq!(err.message(), "Email not confirmed");
    assert_eq!(classify_auth_error(&err).kind, AuthFailureKind::EmailNotConfirmed);
}

#[test]
fn test_parse_rest_error_body() {
    let err = parse_api_error(
        401,
        r#"{"code":"42501","details":null,"hint":null,"message":"new row violates row-level security policy"}"#,
    );
    assert_eq!(err.code(), Some("42501"));
    assert!(matches!(RepositoryError::from(err), RepositoryError::PermissionDenied(_)));
}

#[test]
fn test_parse_unreadable_body_uses_status_reason() {
    let err = parse_api_error(502, "<html>bad gateway</html>");
    assert_eq!(err.message(), "Bad Gateway");
    assert!(matches!(RepositoryError::from(err), RepositoryError::DatabaseError(_)));
}
