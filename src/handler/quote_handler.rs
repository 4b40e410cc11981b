use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use serde::Serialize;
use tracing::{error, info};

use crate::app::AppState;
use crate::dto::quote_dto::QuoteFormValues;
use crate::middlewares::session_middleware::SessionContext;
use crate::model::notification::Notification;
use crate::page::quote_page::{QuotePage, QuotePageView, QuoteStatus, SubmitOutcome};
use crate::util::error::{HandlerError, HandlerErrorKind};

#[derive(Debug, Serialize)]
pub struct QuoteSubmitted {
    pub notice: Notification,
    pub status: QuoteStatus,
}

async fn open_page(state: &AppState, context: &SessionContext) -> QuotePage {
    let store = state.session_store(context);
    let observer = state.observe(&store).await;
    QuotePage::new(observer, store, state.quotes.clone(), state.profiles.clone())
}

/// Quote form as first shown, pre-filled for signed-in users.
pub async fn quote_form_handler(
    State(state): State<AppState>,
    Extension(context): Extension<SessionContext>,
) -> Json<QuotePageView> {
    info!("[quote_form_handler] Handler called");
    let mut page = open_page(&state, &context).await;
    page.prefill().await;
    let view = page.view();
    page.teardown();
    Json(view)
}

pub async fn submit_quote_handler(
    State(state): State<AppState>,
    Extension(context): Extension<SessionContext>,
    Json(values): Json<QuoteFormValues>,
) -> Result<impl IntoResponse, HandlerError> {
    info!("[submit_quote_handler] Handler called");
    let mut page = open_page(&state, &context).await;
    values.apply_to(page.form_mut());
    let outcome = page.submit().await;
    let status = page.status();
    page.teardown();

    match outcome {
        SubmitOutcome::Submitted(notice) => Ok((StatusCode::CREATED, Json(QuoteSubmitted { notice, status }))),
        SubmitOutcome::Invalid(errors) => Err(HandlerError::validation(errors)),
        SubmitOutcome::Failed(notice) => {
            error!("[submit_quote_handler] Quote request not stored");
            Err(HandlerError::notice(HandlerErrorKind::Upstream, notice))
        }
        SubmitOutcome::AlreadySubmitted => Err(HandlerError::new(
            HandlerErrorKind::Conflict,
            "Quote request already submitted",
        )),
    }
}
