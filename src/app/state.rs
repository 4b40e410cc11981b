use std::sync::Arc;

use crate::middlewares::session_middleware::SessionContext;
use crate::model::catalog::Catalog;
use crate::repository::profile_repo::ProfileRepository;
use crate::service::contact_service::ContactService;
use crate::service::quote_service::QuoteService;
use crate::service::session_observer::SessionObserver;
use crate::service::session_store::{SessionSource, SessionStore};
use crate::util::backend::AuthBackend;

/// Shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthBackend>,
    pub quotes: Arc<dyn QuoteService>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub contact: Arc<dyn ContactService>,
    pub catalog: Arc<Catalog>,
    pub site_origin: String,
}

impl AppState {
    /// A session holder scoped to one request.
    pub fn session_store(&self, context: &SessionContext) -> Arc<SessionStore> {
        Arc::new(SessionStore::restore(self.auth.clone(), context.session()))
    }

    pub async fn observe(&self, store: &Arc<SessionStore>) -> SessionObserver {
        let source: Arc<dyn SessionSource> = store.clone();
        SessionObserver::start(source).await
    }
}
