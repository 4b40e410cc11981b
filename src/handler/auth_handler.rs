use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use serde::Serialize;
use tracing::{info, warn};

use crate::app::AppState;
use crate::dto::auth_dto::AuthFormValues;
use crate::middlewares::session_middleware::SessionContext;
use crate::model::notification::Notification;
use crate::model::session::Session;
use crate::page::auth_page::{AuthMode, AuthOutcome, AuthPage};
use crate::service::auth_service::AuthFailureKind;
use crate::util::error::{HandlerError, HandlerErrorKind};

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub notice: Notification,
    /// Mode the page shows next
    pub mode: AuthMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}

pub async fn sign_in_handler(
    State(state): State<AppState>,
    Json(values): Json<AuthFormValues>,
) -> Result<impl IntoResponse, HandlerError> {
    info!("[sign_in_handler] Handler called");
    submit(&state, AuthMode::SignIn, values).await
}

pub async fn sign_up_handler(
    State(state): State<AppState>,
    Json(values): Json<AuthFormValues>,
) -> Result<impl IntoResponse, HandlerError> {
    info!("[sign_up_handler] Handler called");
    submit(&state, AuthMode::SignUp, values).await
}

async fn submit(
    state: &AppState,
    mode: AuthMode,
    values: AuthFormValues,
) -> Result<(StatusCode, Json<AuthResponse>), HandlerError> {
    let store = state.session_store(&SessionContext::anonymous());
    let mut page = AuthPage::new(store, state.site_origin.clone());
    page.set_mode(mode);
    values.apply_to(page.form_mut());

    match page.submit().await {
        AuthOutcome::SignedIn { notice, redirect, session } => Ok((
            StatusCode::OK,
            Json(AuthResponse {
                notice,
                mode: page.mode(),
                redirect: Some(redirect),
                session: Some(session),
            }),
        )),
        AuthOutcome::SignedUp { notice, session } => Ok((
            StatusCode::CREATED,
            Json(AuthResponse {
                notice,
                mode: page.mode(),
                redirect: None,
                session,
            }),
        )),
        AuthOutcome::Invalid(errors) => Err(HandlerError::validation(errors)),
        AuthOutcome::Failed(failure) => {
            warn!(kind = ?failure.kind, "[auth] Rejected by the auth service: {}", failure.message);
            let kind = match failure.kind {
                AuthFailureKind::InvalidCredentials => HandlerErrorKind::Unauthorized,
                AuthFailureKind::EmailNotConfirmed => HandlerErrorKind::Forbidden,
                AuthFailureKind::AlreadyRegistered => HandlerErrorKind::Conflict,
                AuthFailureKind::Other => HandlerErrorKind::BadRequest,
            };
            Err(HandlerError::notice(kind, failure.notification()))
        }
    }
}

/// Always 204: the caller drops its tokens whether or not revocation went through.
pub async fn sign_out_handler(
    State(state): State<AppState>,
    Extension(context): Extension<SessionContext>,
) -> StatusCode {
    info!("[sign_out_handler] Handler called");
    let store = state.session_store(&context);
    if let Err(e) = store.sign_out().await {
        warn!("[sign_out_handler] Revocation failed: {}", e);
    }
    StatusCode::NO_CONTENT
}
