use axum::{extract::State, http::{StatusCode, Uri}, response::{Html, IntoResponse}, Json};
use tracing::debug;

use crate::app::AppState;
use crate::model::catalog::Catalog;
use crate::page::site::Page;

/// Page shell for any public route; unknown paths get the 404 shell.
pub async fn page_shell_handler(uri: Uri) -> impl IntoResponse {
    let page = Page::from_path(uri.path());
    debug!(path = uri.path(), ?page, "Serving page shell");
    let status = if page == Page::NotFound {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    (status, Html(page.shell()))
}

pub async fn catalog_handler(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.catalog.as_ref().clone())
}

pub async fn health_handler() -> &'static str {
    "OK"
}
