use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use crate::model::quote_request::QuoteRequest;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use crate::util::backend::HostedBackend;

#[async_trait]
pub trait QuoteRequestRepository: Send + Sync {
    /// One insert, no read-back. `access_token` authorizes the row as the
    /// signed-in user; `None` goes through as the anonymous role.
    async fn insert(&self, request: &QuoteRequest, access_token: Option<&str>) -> RepositoryResult<()>;
}

pub struct HostedQuoteRequestRepository {
    backend: Arc<HostedBackend>,
    table: String,
}

impl HostedQuoteRequestRepository {
    pub fn new(backend: Arc<HostedBackend>) -> Self {
        let table = backend.config.quote_table.clone();
        HostedQuoteRequestRepository { backend, table }
    }
}

#[async_trait]
impl QuoteRequestRepository for HostedQuoteRequestRepository {
    #[tracing::instrument(skip(self, request, access_token), fields(product_type = %request.product_type, signed_in = request.user_id.is_some()))]
    async fn insert(&self, request: &QuoteRequest, access_token: Option<&str>) -> RepositoryResult<()> {
        info!("Inserting quote request");
        let result = self.backend.insert_row(&self.table, request, access_token).await;
        match result {
            Ok(()) => {
                info!("Quote request stored");
                Ok(())
            }
            Err(e) => {
                error!("Failed to store quote request: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }
}
