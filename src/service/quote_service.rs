use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::dto::quote_dto::ValidatedQuote;
use crate::model::notification::Notification;
use crate::model::session::Identity;
use crate::repository::quote_request_repo::QuoteRequestRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait QuoteService: Send + Sync {
	/// Stores one quote request. The identity's id is attached when there is one.
	async fn submit(
		&self,
		quote: ValidatedQuote,
		identity: Option<&Identity>,
		access_token: Option<&str>,
	) -> Result<(), ServiceError>;
}

pub struct QuoteServiceImpl {
	pub quote_repo: Arc<dyn QuoteRequestRepository>,
}

impl QuoteServiceImpl {
	pub fn new(quote_repo: Arc<dyn QuoteRequestRepository>) -> Self {
		QuoteServiceImpl { quote_repo }
	}
}

#[async_trait]
impl QuoteService for QuoteServiceImpl {
	#[instrument(skip(self, quote, identity, access_token), fields(product_type = %quote.product_type, signed_in = identity.is_some()))]
	async fn submit(
		&self,
		quote: ValidatedQuote,
		identity: Option<&Identity>,
		access_token: Option<&str>,
	) -> Result<(), ServiceError> {
		info!("Submitting quote request");
		let record = quote.into_record(identity.map(|i| i.id));
		// An anonymous request must not carry a leftover user token.
		let token = identity.and(access_token);

		match self.quote_repo.insert(&record, token).await {
			Ok(()) => {
				info!("Quote request submitted");
				Ok(())
			}
			Err(e) => {
				error!("Quote request submission failed: {}", e);
				Err(ServiceError::from(e))
			}
		}
	}
}

pub fn submitted_notice() -> Notification {
	Notification::info("Demande envoyée !", "Nous vous répondrons sous 24h.")
}

/// The one message shown for every failed submission, whatever the cause.
pub fn failure_notice() -> Notification {
	Notification::destructive("Erreur", "Une erreur est survenue. Veuillez réessayer.")
}
