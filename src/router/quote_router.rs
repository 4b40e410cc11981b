use axum::{middleware, routing::{get, post}, Router};
use std::sync::Arc;

use crate::app::AppState;
use crate::handler::contact_handler::contact_handler;
use crate::handler::quote_handler::{quote_form_handler, submit_quote_handler};
use crate::middlewares::session_middleware::{session_context, SessionAuthState};

pub fn quote_router(state: AppState, session_auth: Arc<SessionAuthState>) -> Router {
    let quotes = Router::new()
        .route("/api/devis", post(submit_quote_handler))
        .route("/api/devis/form", get(quote_form_handler))
        .route_layer(middleware::from_fn_with_state(session_auth, session_context));

    Router::new()
        .route("/api/contact", post(contact_handler))
        .merge(quotes)
        .with_state(state)
}
