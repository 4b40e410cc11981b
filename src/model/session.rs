use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User object as returned by the hosted auth service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: Option<serde_json::Value>,
}

/// Proof of a signed-in identity, issued and refreshed by the hosted service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: AuthUser,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl Session {
    pub fn identity(&self) -> Identity {
        Identity::from(&self.user)
    }
}

/// The part of a session the pages care about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: Option<String>,
}

impl From<&AuthUser> for Identity {
    fn from(user: &AuthUser) -> Self {
        Identity {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

/// Session-change notifications, mirroring the hosted client's events.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    SignedIn(Session),
    SignedOut,
    TokenRefreshed(Session),
}

impl AuthEvent {
    /// Session carried by the event; `None` means signed out.
    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthEvent::SignedIn(s) | AuthEvent::TokenRefreshed(s) => Some(s),
            AuthEvent::SignedOut => None,
        }
    }
}
