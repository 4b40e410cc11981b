mod common;

use akaa_site::page::auth_page::{AuthMode, AuthOutcome, AuthPage};
use akaa_site::service::auth_service::AuthFailureKind;
use akaa_site::service::session_store::SessionStore;
use common::{user_id, FakeAuthBackend, SITE_ORIGIN};
use std::sync::atomic::Ordering;
use std::sync::Arc;

fn page_with(backend: FakeAuthBackend) -> (AuthPage, Arc<FakeAuthBackend>, Arc<SessionStore>) {
    let backend = Arc::new(backend);
    let store = Arc::new(SessionStore::new(backend.clone()));
    (AuthPage::new(store.clone(), SITE_ORIGIN), backend, store)
}

fn fill_sign_up(page: &mut AuthPage) {
    page.change("fullName", "Awa Koné");
    page.change("company", "Koné SARL");
    page.change("email", "awa@example.com");
    page.change("password", "secret1");
    page.change("confirmPassword", "secret1");
}

#[tokio::test]
async fn test_starts_in_sign_in_mode() {
    let (page, _, _) = page_with(FakeAuthBackend::new());
    assert_eq!(page.mode(), AuthMode::SignIn);
    assert_eq!(page.redirect_url(), "https://akaa-groupe.test/");
}

#[tokio::test]
async fn test_toggle_clears_errors_and_keeps_values() {
    let (mut page, backend, _) = page_with(FakeAuthBackend::new());
    page.change("email", "awa@example.com");
    page.change("password", "123");

    assert!(matches!(page.submit().await, AuthOutcome::Invalid(_)));
    assert!(page.form().errors().contains("password"));

    page.toggle_mode();
    assert_eq!(page.mode(), AuthMode::SignUp);
    assert!(page.form().errors().is_empty());
    assert_eq!(page.form().value("email"), "awa@example.com");
    assert_eq!(page.form().value("password"), "123");

    page.toggle_mode();
    assert_eq!(page.mode(), AuthMode::SignIn);
    assert_eq!(page.form().value("email"), "awa@example.com");
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_sign_in_success() {
    let (mut page, _, store) = page_with(FakeAuthBackend::new());
    page.change("email", "jean@example.com");
    page.change("password", "secret1");

    match page.submit().await {
        AuthOutcome::SignedIn { notice, redirect, session } => {
            assert_eq!(notice.title, "Connexion réussie");
            assert_eq!(notice.description, "Bienvenue !");
            assert_eq!(redirect, "/");
            assert_eq!(session.user.id, user_id());
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(store.session().is_some());
}

#[tokio::test]
async fn test_sign_in_invalid_credentials() {
    let (mut page, _, store) = page_with(FakeAuthBackend::failing_sign_in(400, None, "Invalid login credentials"));
    page.change("email", "jean@example.com");
    page.change("password", "wrong-password");

    match page.submit().await {
        AuthOutcome::Failed(failure) => {
            assert_eq!(failure.kind, AuthFailureKind::InvalidCredentials);
            assert_eq!(failure.notification().description, "Email ou mot de passe incorrect");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(store.session().is_none());
}

#[tokio::test]
async fn test_sign_in_unconfirmed_email() {
    let (mut page, _, _) = page_with(FakeAuthBackend::failing_sign_in(400, Some("email_not_confirmed"), "Email not confirmed"));
    page.change("email", "jean@example.com");
    page.change("password", "secret1");

    match page.submit().await {
        AuthOutcome::Failed(failure) => {
            assert_eq!(failure.notification().title, "Email non confirmé");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[tokio::test]
async fn test_sign_up_success_switches_to_sign_in() {
    let (mut page, backend, _) = page_with(FakeAuthBackend::new());
    page.set_mode(AuthMode::SignUp);
    fill_sign_up(&mut page);

    match page.submit().await {
        AuthOutcome::SignedUp { notice, session } => {
            assert_eq!(notice.title, "Inscription réussie !");
            assert_eq!(notice.description, "Vérifiez votre email pour confirmer votre compte.");
            assert!(session.is_none());
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(page.mode(), AuthMode::SignIn);

    let sign_ups = backend.sign_ups.lock().unwrap().clone();
    assert_eq!(sign_ups.len(), 1);
    assert_eq!(sign_ups[0].full_name, "Awa Koné");
    assert_eq!(sign_ups[0].company.as_deref(), Some("Koné SARL"));
    assert_eq!(sign_ups[0].phone, None);
    assert_eq!(sign_ups[0].redirect_to, "https://akaa-groupe.test/");
}

#[tokio::test]
async fn test_sign_up_with_immediate_session_is_held() {
    let backend = FakeAuthBackend::new();
    backend.sign_up_returns_session.store(true, Ordering::SeqCst);
    let (mut page, _, store) = page_with(backend);
    page.set_mode(AuthMode::SignUp);
    fill_sign_up(&mut page);

    assert!(matches!(page.submit().await, AuthOutcome::SignedUp { session: Some(_), .. }));
    assert!(store.session().is_some());
}

#[tokio::test]
async fn test_sign_up_existing_account() {
    let (mut page, _, _) = page_with(FakeAuthBackend::failing_sign_up(422, None, "User already registered"));
    page.set_mode(AuthMode::SignUp);
    fill_sign_up(&mut page);

    match page.submit().await {
        AuthOutcome::Failed(failure) => {
            let notice = failure.notification();
            assert_eq!(notice.title, "Compte existant");
            assert_eq!(notice.description, "Un compte existe déjà avec cet email. Connectez-vous.");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(page.mode(), AuthMode::SignUp);
}

#[tokio::test]
async fn test_sign_up_other_error_shows_service_message() {
    let (mut page, _, _) = page_with(FakeAuthBackend::failing_sign_up(400, Some("weak_password"), "Password is too weak"));
    page.set_mode(AuthMode::SignUp);
    fill_sign_up(&mut page);

    match page.submit().await {
        AuthOutcome::Failed(failure) => {
            let notice = failure.notification();
            assert_eq!(notice.title, "Erreur");
            assert_eq!(notice.description, "Password is too weak");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[tokio::test]
async fn test_sign_up_mismatched_passwords_makes_no_call() {
    let (mut page, backend, _) = page_with(FakeAuthBackend::new());
    page.set_mode(AuthMode::SignUp);
    fill_sign_up(&mut page);
    page.change("confirmPassword", "secret2");

    match page.submit().await {
        AuthOutcome::Invalid(errors) => {
            assert_eq!(errors.get("confirmPassword"), Some("Les mots de passe ne correspondent pas"));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(backend.calls().is_empty());
}
