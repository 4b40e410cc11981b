#![allow(dead_code)]

use akaa_site::app::app::build_router;
use akaa_site::app::AppState;
use akaa_site::config::JwtConfig;
use akaa_site::dto::auth_dto::SignUpRequest;
use akaa_site::middlewares::session_middleware::SessionAuthState;
use akaa_site::model::catalog::Catalog;
use akaa_site::model::profile::Profile;
use akaa_site::model::quote_request::QuoteRequest;
use akaa_site::model::session::{AuthEvent, AuthUser, Session};
use akaa_site::repository::profile_repo::ProfileRepository;
use akaa_site::repository::quote_request_repo::QuoteRequestRepository;
use akaa_site::repository::repository_error::{RepositoryError, RepositoryResult};
use akaa_site::service::contact_service::LoggingContactService;
use akaa_site::service::quote_service::QuoteServiceImpl;
use akaa_site::service::session_store::SessionSource;
use akaa_site::util::backend::{AuthBackend, BackendError};
use akaa_site::util::jwt::JwtTokenUtilsImpl;
use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;
use uuid::Uuid;

pub const SITE_ORIGIN: &str = "https://akaa-groupe.test";

pub fn user_id() -> Uuid {
    Uuid::parse_str("6f1d2a8e-3c4b-4e5f-9a7b-1c2d3e4f5a6b").unwrap()
}

pub fn session_for(id: Uuid, email: &str) -> Session {
    Session {
        access_token: mint_token(id, email),
        refresh_token: Some("refresh-token".to_string()),
        expires_in: Some(3600),
        token_type: "bearer".to_string(),
        user: AuthUser {
            id,
            email: Some(email.to_string()),
            user_metadata: None,
        },
    }
}

/// Signs a token the way the hosted auth service does.
pub fn mint_token(id: Uuid, email: &str) -> String {
    mint_token_with(id, email, "authenticated", Utc::now().timestamp() + 3600)
}

pub fn mint_token_with(id: Uuid, email: &str, aud: &str, exp: i64) -> String {
    let claims = json!({
        "sub": id.to_string(),
        "email": email,
        "role": "authenticated",
        "aud": aud,
        "exp": exp,
        "iat": Utc::now().timestamp(),
    });
    let secret = JwtConfig::default().jwt_secret;
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
}

pub fn api_error(status: u16, code: Option<&str>, message: &str) -> BackendError {
    BackendError::Api {
        status,
        code: code.map(str::to_string),
        message: message.to_string(),
    }
}

#[derive(Clone)]
pub struct ScriptedError {
    pub status: u16,
    pub code: Option<String>,
    pub message: String,
}

impl ScriptedError {
    pub fn new(status: u16, code: Option<&str>, message: &str) -> Self {
        ScriptedError {
            status,
            code: code.map(str::to_string),
            message: message.to_string(),
        }
    }

    fn to_error(&self) -> BackendError {
        api_error(self.status, self.code.as_deref(), &self.message)
    }
}

/// Auth backend that accepts everything unless told otherwise.
#[derive(Default)]
pub struct FakeAuthBackend {
    pub sign_in_error: Mutex<Option<ScriptedError>>,
    pub sign_up_error: Mutex<Option<ScriptedError>>,
    pub sign_up_returns_session: AtomicBool,
    pub get_user_fails: AtomicBool,
    pub user_email: Mutex<Option<String>>,
    pub sign_ups: Mutex<Vec<SignUpRequest>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeAuthBackend {
    pub fn new() -> Self {
        FakeAuthBackend::default()
    }

    pub fn failing_sign_in(status: u16, code: Option<&str>, message: &str) -> Self {
        let backend = FakeAuthBackend::new();
        *backend.sign_in_error.lock().unwrap() = Some(ScriptedError::new(status, code, message));
        backend
    }

    pub fn failing_sign_up(status: u16, code: Option<&str>, message: &str) -> Self {
        let backend = FakeAuthBackend::new();
        *backend.sign_up_error.lock().unwrap() = Some(ScriptedError::new(status, code, message));
        backend
    }

    pub fn with_user_email(email: &str) -> Self {
        let backend = FakeAuthBackend::new();
        *backend.user_email.lock().unwrap() = Some(email.to_string());
        backend
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }
}

#[async_trait]
impl AuthBackend for FakeAuthBackend {
    async fn sign_in_with_password(&self, email: &str, _password: &str) -> Result<Session, BackendError> {
        self.record("sign_in");
        if let Some(err) = self.sign_in_error.lock().unwrap().as_ref() {
            return Err(err.to_error());
        }
        Ok(session_for(user_id(), email))
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<Option<Session>, BackendError> {
        self.record("sign_up");
        if let Some(err) = self.sign_up_error.lock().unwrap().as_ref() {
            return Err(err.to_error());
        }
        self.sign_ups.lock().unwrap().push(request.clone());
        if self.sign_up_returns_session.load(Ordering::SeqCst) {
            Ok(Some(session_for(Uuid::new_v4(), &request.email)))
        } else {
            Ok(None)
        }
    }

    async fn sign_out(&self, _access_token: &str) -> Result<(), BackendError> {
        self.record("sign_out");
        Ok(())
    }

    async fn get_user(&self, _access_token: &str) -> Result<AuthUser, BackendError> {
        self.record("get_user");
        if self.get_user_fails.load(Ordering::SeqCst) {
            return Err(api_error(500, None, "upstream unavailable"));
        }
        Ok(AuthUser {
            id: user_id(),
            email: self.user_email.lock().unwrap().clone(),
            user_metadata: None,
        })
    }

    async fn refresh_session(&self, _refresh_token: &str) -> Result<Session, BackendError> {
        self.record("refresh_session");
        let mut session = session_for(user_id(), "refreshed@akaa-groupe.test");
        session.access_token = "refreshed-token".to_string();
        Ok(session)
    }
}

/// Keeps inserted quote requests, with the token each was sent with.
#[derive(Default)]
pub struct InMemoryQuoteRepo {
    pub rows: Mutex<Vec<(QuoteRequest, Option<String>)>>,
    pub fail: AtomicBool,
}

impl InMemoryQuoteRepo {
    pub fn new() -> Self {
        InMemoryQuoteRepo::default()
    }

    pub fn failing() -> Self {
        let repo = InMemoryQuoteRepo::default();
        repo.fail.store(true, Ordering::SeqCst);
        repo
    }

    pub fn rows(&self) -> Vec<(QuoteRequest, Option<String>)> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuoteRequestRepository for InMemoryQuoteRepo {
    async fn insert(&self, request: &QuoteRequest, access_token: Option<&str>) -> RepositoryResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(RepositoryError::permission_denied("new row violates row-level security policy"));
        }
        self.rows
            .lock()
            .unwrap()
            .push((request.clone(), access_token.map(str::to_string)));
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryProfileRepo {
    pub profiles: Mutex<Vec<Profile>>,
    pub fail: AtomicBool,
    pub lookups: AtomicUsize,
}

impl InMemoryProfileRepo {
    pub fn new() -> Self {
        InMemoryProfileRepo::default()
    }

    pub fn with(profile: Profile) -> Self {
        let repo = InMemoryProfileRepo::default();
        repo.profiles.lock().unwrap().push(profile);
        repo
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepo {
    async fn find_by_user_id(&self, user_id: Uuid, _access_token: &str) -> RepositoryResult<Option<Profile>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(RepositoryError::connection("connection refused"));
        }
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }
}

/// Session source whose initial read always fails.
pub struct BrokenSessionSource {
    pub events: broadcast::Sender<AuthEvent>,
}

impl BrokenSessionSource {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(8);
        BrokenSessionSource { events }
    }
}

#[async_trait]
impl SessionSource for BrokenSessionSource {
    async fn current_session(&self) -> Result<Option<Session>, BackendError> {
        Err(api_error(503, None, "service unavailable"))
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}

pub struct TestApp {
    pub router: Router,
    pub auth: Arc<FakeAuthBackend>,
    pub quotes: Arc<InMemoryQuoteRepo>,
    pub profiles: Arc<InMemoryProfileRepo>,
}

pub fn test_app(auth: FakeAuthBackend, quotes: InMemoryQuoteRepo, profiles: InMemoryProfileRepo) -> TestApp {
    let auth = Arc::new(auth);
    let quotes = Arc::new(quotes);
    let profiles = Arc::new(profiles);

    let state = AppState {
        auth: auth.clone(),
        quotes: Arc::new(QuoteServiceImpl::new(quotes.clone())),
        profiles: profiles.clone(),
        contact: Arc::new(LoggingContactService),
        catalog: Arc::new(Catalog::standard()),
        site_origin: SITE_ORIGIN.to_string(),
    };
    let session_auth = Arc::new(SessionAuthState {
        jwt_utils: Arc::new(JwtTokenUtilsImpl::new(JwtConfig::default())),
    });

    TestApp {
        router: build_router(state, session_auth),
        auth,
        quotes,
        profiles,
    }
}

pub fn default_app() -> TestApp {
    test_app(FakeAuthBackend::new(), InMemoryQuoteRepo::new(), InMemoryProfileRepo::new())
}
