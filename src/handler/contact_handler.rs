use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, info};

use crate::app::AppState;
use crate::dto::contact_dto::ContactFormValues;
use crate::util::error::{HandlerError, HandlerErrorKind};

pub async fn contact_handler(
    State(state): State<AppState>,
    Json(values): Json<ContactFormValues>,
) -> Result<StatusCode, HandlerError> {
    info!("[contact_handler] Handler called");
    let message = values.validate_contact().map_err(HandlerError::validation)?;
    state.contact.receive(message).await.map_err(|e| {
        error!("[contact_handler] Failed to record contact message: {}", e);
        HandlerError::new(HandlerErrorKind::Internal, "Failed to record contact message")
    })?;
    Ok(StatusCode::ACCEPTED)
}
