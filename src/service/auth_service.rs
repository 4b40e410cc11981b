use serde::Serialize;
use tracing::debug;

use crate::model::notification::Notification;
use crate::util::backend::BackendError;

/// How an auth failure is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthFailureKind {
    InvalidCredentials,
    EmailNotConfirmed,
    AlreadyRegistered,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFailure {
    pub kind: AuthFailureKind,
    /// The service's own wording, shown as-is for `Other`.
    pub message: String,
}

impl AuthFailure {
    pub fn notification(&self) -> Notification {
        match self.kind {
            AuthFailureKind::InvalidCredentials => {
                Notification::destructive("Erreur de connexion", "Email ou mot de passe incorrect")
            }
            AuthFailureKind::EmailNotConfirmed => Notification::destructive(
                "Email non confirmé",
                "Veuillez confirmer votre email avant de vous connecter",
            ),
            AuthFailureKind::AlreadyRegistered => Notification::destructive(
                "Compte existant",
                "Un compte existe déjà avec cet email. Connectez-vous.",
            ),
            AuthFailureKind::Other => Notification::destructive("Erreur", self.message.clone()),
        }
    }
}

// Message fragments the hosted service uses when it sends no error code.
pub const INVALID_CREDENTIALS_TEXT: &str = "Invalid login credentials";
pub const EMAIL_NOT_CONFIRMED_TEXT: &str = "Email not confirmed";
pub const ALREADY_REGISTERED_TEXT: &str = "User already registered";

/// Error code first, message text as fallback.
pub fn classify_auth_error(err: &BackendError) -> AuthFailure {
    let message = err.message();
    let kind = err
        .code()
        .and_then(kind_from_code)
        .unwrap_or_else(|| kind_from_message(&message));
    debug!(?kind, code = ?err.code(), "Classified auth failure");
    AuthFailure { kind, message }
}

fn kind_from_code(code: &str) -> Option<AuthFailureKind> {
    match code {
        "invalid_credentials" => Some(AuthFailureKind::InvalidCredentials),
        "email_not_confirmed" => Some(AuthFailureKind::EmailNotConfirmed),
        "user_already_exists" | "email_exists" => Some(AuthFailureKind::AlreadyRegistered),
        _ => None,
    }
}

fn kind_from_message(message: &str) -> AuthFailureKind {
    if message.contains(INVALID_CREDENTIALS_TEXT) {
        AuthFailureKind::InvalidCredentials
    } else if message.contains(EMAIL_NOT_CONFIRMED_TEXT) {
        AuthFailureKind::EmailNotConfirmed
    } else if message.contains(ALREADY_REGISTERED_TEXT) {
        AuthFailureKind::AlreadyRegistered
    } else {
        AuthFailureKind::Other
    }
}

pub fn sign_in_success() -> Notification {
    Notification::info("Connexion réussie", "Bienvenue !")
}

pub fn sign_up_success() -> Notification {
    Notification::info("Inscription réussie !", "Vérifiez votre email pour confirmer votre compte.")
}
