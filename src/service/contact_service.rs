use async_trait::async_trait;
use tracing::{info, instrument};

use crate::dto::contact_dto::ContactMessage;
use crate::util::error::ServiceError;

#[async_trait]
pub trait ContactService: Send + Sync {
    async fn receive(&self, message: ContactMessage) -> Result<(), ServiceError>;
}

/// Contact messages are only recorded in the logs.
pub struct LoggingContactService;

#[async_trait]
impl ContactService for LoggingContactService {
    #[instrument(skip(self, message), fields(subject = message.subject.label()))]
    async fn receive(&self, message: ContactMessage) -> Result<(), ServiceError> {
        info!(
            name = %message.name,
            email = %message.email,
            company = ?message.company,
            phone = ?message.phone,
            message = %message.message,
            "Contact form received"
        );
        Ok(())
    }
}
