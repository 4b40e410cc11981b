use axum::{middleware, routing::{get, post}, Router};
use std::sync::Arc;

use crate::app::AppState;
use crate::handler::auth_handler::{sign_in_handler, sign_out_handler, sign_up_handler};
use crate::handler::session_handler::get_session_handler;
use crate::middlewares::session_middleware::{session_context, SessionAuthState};

pub fn auth_router(state: AppState, session_auth: Arc<SessionAuthState>) -> Router {
    let public = Router::new()
        .route("/api/auth/sign-in", post(sign_in_handler))
        .route("/api/auth/sign-up", post(sign_up_handler));

    let with_session = Router::new()
        .route("/api/session", get(get_session_handler))
        .route("/api/auth/sign-out", post(sign_out_handler))
        .route_layer(middleware::from_fn_with_state(session_auth, session_context));

    public.merge(with_session).with_state(state)
}
