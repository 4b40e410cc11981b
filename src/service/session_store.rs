use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;
use tracing::{debug, info, instrument, warn};

use crate::dto::auth_dto::{SignInCredentials, SignUpRequest};
use crate::model::session::{AuthEvent, AuthUser, Session};
use crate::util::backend::{AuthBackend, BackendError};

const EVENT_CAPACITY: usize = 16;

/// Where session observers read the current session and hear about changes.
#[async_trait]
pub trait SessionSource: Send + Sync {
    async fn current_session(&self) -> Result<Option<Session>, BackendError>;
    fn subscribe(&self) -> broadcast::Receiver<AuthEvent>;
}

/// Client-side holder of the hosted service's session.
///
/// Sign-in, sign-up, sign-out and refresh go through here so that every
/// change is broadcast to subscribers as an [`AuthEvent`].
pub struct SessionStore {
    backend: Arc<dyn AuthBackend>,
    session: RwLock<Option<Session>>,
    events: broadcast::Sender<AuthEvent>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn AuthBackend>) -> Self {
        Self::restore(backend, None)
    }

    /// Store that starts out holding `session`, e.g. one carried by a request.
    pub fn restore(backend: Arc<dyn AuthBackend>, session: Option<Session>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        SessionStore {
            backend,
            session: RwLock::new(session),
            events,
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.session.read().ok().and_then(|s| s.clone())
    }

    pub fn access_token(&self) -> Option<String> {
        self.session().map(|s| s.access_token)
    }

    fn replace(&self, session: Option<Session>, event: AuthEvent) {
        match self.session.write() {
            Ok(mut slot) => *slot = session,
            Err(poisoned) => *poisoned.into_inner() = session,
        }
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn sign_in(&self, credentials: &SignInCredentials) -> Result<Session, BackendError> {
        info!("Signing in");
        let session = self
            .backend
            .sign_in_with_password(&credentials.email, &credentials.password)
            .await?;
        self.replace(Some(session.clone()), AuthEvent::SignedIn(session.clone()));
        info!(user_id = %session.user.id, "Signed in");
        Ok(session)
    }

    /// Creates the account. A session only comes back when the service does
    /// not require e-mail confirmation; it is then held like a sign-in.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<Option<Session>, BackendError> {
        info!("Signing up");
        let session = self.backend.sign_up(request).await?;
        match &session {
            Some(s) => self.replace(Some(s.clone()), AuthEvent::SignedIn(s.clone())),
            None => debug!("Sign-up awaiting e-mail confirmation"),
        }
        Ok(session)
    }

    /// Drops the local session even when the revocation call fails.
    #[instrument(skip(self))]
    pub async fn sign_out(&self) -> Result<(), BackendError> {
        let Some(token) = self.access_token() else {
            debug!("Sign-out without a session");
            return Ok(());
        };
        let revoked = self.backend.sign_out(&token).await;
        self.replace(None, AuthEvent::SignedOut);
        if let Err(e) = &revoked {
            warn!("Session revocation failed: {}", e);
        }
        info!("Signed out");
        revoked
    }

    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<Session, BackendError> {
        let refresh_token = self
            .session()
            .and_then(|s| s.refresh_token)
            .ok_or_else(|| BackendError::Config("no refresh token held".to_string()))?;
        let session = self.backend.refresh_session(&refresh_token).await?;
        self.replace(Some(session.clone()), AuthEvent::TokenRefreshed(session.clone()));
        debug!("Session refreshed");
        Ok(session)
    }

    /// Current user as the service sees it; `None` when signed out.
    pub async fn get_user(&self) -> Result<Option<AuthUser>, BackendError> {
        match self.access_token() {
            Some(token) => self.backend.get_user(&token).await.map(Some),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl SessionSource for SessionStore {
    async fn current_session(&self) -> Result<Option<Session>, BackendError> {
        Ok(self.session())
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}
