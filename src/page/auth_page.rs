use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::dto::auth_dto::{AuthFormValues, AUTH_FIELDS};
use crate::form::{FieldErrors, FormState};
use crate::model::notification::Notification;
use crate::model::session::Session;
use crate::service::auth_service::{classify_auth_error, sign_in_success, sign_up_success, AuthFailure};
use crate::service::session_store::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthMode {
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    Invalid(FieldErrors),
    SignedIn {
        notice: Notification,
        redirect: &'static str,
        session: Session,
    },
    /// Account created; the page is back in sign-in mode.
    SignedUp {
        notice: Notification,
        session: Option<Session>,
    },
    Failed(AuthFailure),
}

pub const HOME_PATH: &str = "/";

/// Sign-in / sign-up page.
pub struct AuthPage {
    form: FormState,
    mode: AuthMode,
    session: Arc<SessionStore>,
    site_origin: String,
}

impl AuthPage {
    pub fn new(session: Arc<SessionStore>, site_origin: impl Into<String>) -> Self {
        AuthPage {
            form: FormState::new(&AUTH_FIELDS),
            mode: AuthMode::SignIn,
            session,
            site_origin: site_origin.into(),
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: AuthMode) {
        if self.mode != mode {
            self.toggle_mode();
        }
    }

    /// Switches mode; errors go away, typed values stay.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
        self.form.clear_errors();
        debug!(mode = ?self.mode, "Auth mode toggled");
    }

    pub fn change(&mut self, field: &str, value: impl Into<String>) -> bool {
        self.form.set(field, value)
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn values(&self) -> AuthFormValues {
        AuthFormValues::from_form(&self.form)
    }

    /// Link target of the confirmation e-mail.
    pub fn redirect_url(&self) -> String {
        format!("{}{}", self.site_origin.trim_end_matches('/'), HOME_PATH)
    }

    pub async fn submit(&mut self) -> AuthOutcome {
        self.form.clear_errors();
        match self.mode {
            AuthMode::SignIn => self.submit_sign_in().await,
            AuthMode::SignUp => self.submit_sign_up().await,
        }
    }

    async fn submit_sign_in(&mut self) -> AuthOutcome {
        let credentials = match self.values().validate_sign_in() {
            Ok(c) => c,
            Err(errors) => return self.reject(errors),
        };
        match self.session.sign_in(&credentials).await {
            Ok(session) => {
                info!("Sign-in accepted");
                AuthOutcome::SignedIn {
                    notice: sign_in_success(),
                    redirect: HOME_PATH,
                    session,
                }
            }
            Err(e) => AuthOutcome::Failed(classify_auth_error(&e)),
        }
    }

    async fn submit_sign_up(&mut self) -> AuthOutcome {
        let request = match self.values().validate_sign_up(&self.redirect_url()) {
            Ok(r) => r,
            Err(errors) => return self.reject(errors),
        };
        match self.session.sign_up(&request).await {
            Ok(session) => {
                info!("Sign-up accepted");
                self.mode = AuthMode::SignIn;
                AuthOutcome::SignedUp {
                    notice: sign_up_success(),
                    session,
                }
            }
            Err(e) => AuthOutcome::Failed(classify_auth_error(&e)),
        }
    }

    fn reject(&mut self, errors: FieldErrors) -> AuthOutcome {
        self.form.set_errors(errors.clone());
        AuthOutcome::Invalid(errors)
    }
}
