use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::app::AppState;
use crate::config::{AppConfig, BackendConfig, JwtConfig};
use crate::middlewares::session_middleware::SessionAuthState;
use crate::model::catalog::Catalog;
use crate::repository::profile_repo::HostedProfileRepository;
use crate::repository::quote_request_repo::HostedQuoteRequestRepository;
use crate::router::auth_router::auth_router;
use crate::router::quote_router::quote_router;
use crate::router::site_router::site_router;
use crate::service::contact_service::LoggingContactService;
use crate::service::quote_service::QuoteServiceImpl;
use crate::util::backend::HostedBackend;
use crate::util::jwt::JwtTokenUtilsImpl;

pub struct App {
    config: AppConfig,
    router: Router,
}

impl App {
    pub async fn new() -> Self {
        let config = AppConfig::from_env();
        let backend_config = BackendConfig::from_env().expect("Backend config error");
        let jwt_config = JwtConfig::from_env().expect("JWT config error");

        let backend = Arc::new(HostedBackend::new(backend_config).expect("Backend client error"));
        let quote_repo = Arc::new(HostedQuoteRequestRepository::new(backend.clone()));
        let profile_repo = Arc::new(HostedProfileRepository::new(backend.clone()));

        let state = AppState {
            auth: backend,
            quotes: Arc::new(QuoteServiceImpl::new(quote_repo)),
            profiles: profile_repo,
            contact: Arc::new(LoggingContactService),
            catalog: Arc::new(Catalog::standard()),
            site_origin: config.site_origin.clone(),
        };
        let session_auth = Arc::new(SessionAuthState {
            jwt_utils: Arc::new(JwtTokenUtilsImpl::new(jwt_config)),
        });

        let router = build_router(state, session_auth);
        App { config, router }
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(self.config.host.parse().expect("Invalid host"), self.config.port);
        info!("Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await.expect("Failed to bind address");
        axum::serve(listener, self.router).await.expect("Failed to start server");
    }
}

pub fn build_router(state: AppState, session_auth: Arc<SessionAuthState>) -> Router {
    Router::new()
        .merge(auth_router(state.clone(), session_auth.clone()))
        .merge(quote_router(state.clone(), session_auth))
        .merge(site_router(state))
}
