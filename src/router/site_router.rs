use axum::{routing::get, Router};

use crate::app::AppState;
use crate::handler::site_handler::{catalog_handler, health_handler, page_shell_handler};
use crate::page::site::Page;

pub fn site_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_handler))
        .route("/api/catalog", get(catalog_handler));
    for page in Page::ROUTED {
        router = router.route(page.path(), get(page_shell_handler));
    }
    router.fallback(page_shell_handler).with_state(state)
}
