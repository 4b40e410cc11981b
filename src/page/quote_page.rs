use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::dto::quote_dto::{QuoteFormValues, QUOTE_FIELDS};
use crate::form::{FieldErrors, FormState};
use crate::model::notification::Notification;
use crate::repository::profile_repo::ProfileRepository;
use crate::service::quote_service::{failure_notice, submitted_notice, QuoteService};
use crate::service::session_observer::SessionObserver;
use crate::service::session_store::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    Editing,
    Submitted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Nothing was sent; errors are on the form.
    Invalid(FieldErrors),
    Submitted(Notification),
    Failed(Notification),
    /// The page already shows the success view.
    AlreadySubmitted,
}

/// What the page renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePageView {
    pub status: QuoteStatus,
    pub signed_in: bool,
    pub values: QuoteFormValues,
    pub errors: FieldErrors,
}

/// The quote request page.
pub struct QuotePage {
    form: FormState,
    status: QuoteStatus,
    observer: SessionObserver,
    session: Arc<SessionStore>,
    quotes: Arc<dyn QuoteService>,
    profiles: Arc<dyn ProfileRepository>,
}

impl QuotePage {
    pub fn new(
        observer: SessionObserver,
        session: Arc<SessionStore>,
        quotes: Arc<dyn QuoteService>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        QuotePage {
            form: FormState::new(&QUOTE_FIELDS),
            status: QuoteStatus::Editing,
            observer,
            session,
            quotes,
            profiles,
        }
    }

    /// New page, pre-filled from the signed-in user's profile.
    pub async fn mount(
        observer: SessionObserver,
        session: Arc<SessionStore>,
        quotes: Arc<dyn QuoteService>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        let mut page = Self::new(observer, session, quotes, profiles);
        page.prefill().await;
        page
    }

    /// One profile read, then one user read for the e-mail. Failures leave
    /// the fields untouched.
    pub async fn prefill(&mut self) {
        let (Some(identity), Some(token)) = (self.observer.identity(), self.session.access_token()) else {
            debug!("No session, quote form left empty");
            return;
        };

        match self.profiles.find_by_user_id(identity.id, &token).await {
            Ok(Some(profile)) => {
                self.form.prefill("fullName", profile.full_name.as_deref());
                self.form.prefill("company", profile.company.as_deref());
                self.form.prefill("phone", profile.phone.as_deref());
            }
            Ok(None) => debug!(user_id = %identity.id, "No profile to pre-fill from"),
            Err(e) => warn!("Profile pre-fill skipped: {}", e),
        }

        match self.session.get_user().await {
            Ok(Some(user)) => self.form.prefill("email", user.email.as_deref()),
            Ok(None) => {}
            Err(e) => warn!("E-mail pre-fill skipped: {}", e),
        }
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

    pub fn status(&self) -> QuoteStatus {
        self.status
    }

    pub fn values(&self) -> QuoteFormValues {
        QuoteFormValues::from_form(&self.form)
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.status == QuoteStatus::Submitted {
            return SubmitOutcome::AlreadySubmitted;
        }
        self.form.clear_errors();

        let quote = match self.values().validate_quote() {
            Ok(quote) => quote,
            Err(errors) => {
                debug!(fields = errors.len(), "Quote form rejected");
                self.form.set_errors(errors.clone());
                return SubmitOutcome::Invalid(errors);
            }
        };

        let identity = self.observer.identity();
        let token = self.session.access_token();
        match self.quotes.submit(quote, identity.as_ref(), token.as_deref()).await {
            Ok(()) => {
                info!("Quote page moved to the success view");
                self.status = QuoteStatus::Submitted;
                SubmitOutcome::Submitted(submitted_notice())
            }
            Err(_) => SubmitOutcome::Failed(failure_notice()),
        }
    }

    /// "Nouvelle demande": back to an empty form.
    pub fn new_request(&mut self) {
        self.form.reset();
        self.status = QuoteStatus::Editing;
    }

    pub fn view(&self) -> QuotePageView {
        QuotePageView {
            status: self.status,
            signed_in: self.observer.is_signed_in(),
            values: self.values(),
            errors: self.form.errors().clone(),
        }
    }

    pub fn teardown(self) {
        self.observer.teardown();
    }
}
