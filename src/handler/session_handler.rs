use axum::{Extension, Json};

use crate::middlewares::session_middleware::SessionContext;
use crate::model::session::Identity;

/// Identity behind the request, or `null`.
pub async fn get_session_handler(Extension(context): Extension<SessionContext>) -> Json<Option<Identity>> {
    Json(context.identity)
}
