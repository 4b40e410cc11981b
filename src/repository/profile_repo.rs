use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};
use uuid::Uuid;

use crate::model::profile::Profile;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use crate::util::backend::HostedBackend;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: Uuid, access_token: &str) -> RepositoryResult<Option<Profile>>;
}

pub struct HostedProfileRepository {
    backend: Arc<HostedBackend>,
    table: String,
}

impl HostedProfileRepository {
    pub fn new(backend: Arc<HostedBackend>) -> Self {
        let table = backend.config.profile_table.clone();
        HostedProfileRepository { backend, table }
    }
}

#[async_trait]
impl ProfileRepository for HostedProfileRepository {
    #[tracing::instrument(skip(self, access_token), fields(user_id = %user_id))]
    async fn find_by_user_id(&self, user_id: Uuid, access_token: &str) -> RepositoryResult<Option<Profile>> {
        debug!("Fetching profile");
        let filters = [("user_id", format!("eq.{}", user_id)), ("limit", "1".to_string())];
        let rows: Vec<Profile> = self
            .backend
            .select_rows(&self.table, &filters, Some(access_token))
            .await
            .map_err(|e| {
                error!("Failed to fetch profile: {}", e);
                RepositoryError::from(e)
            })?;
        Ok(rows.into_iter().next())
    }
}
