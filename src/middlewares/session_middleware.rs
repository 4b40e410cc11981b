use axum::{body::Body, extract::State, http::{header::AUTHORIZATION, Request}, middleware::Next, response::Response};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::model::session::{AuthUser, Identity, Session};
use crate::util::jwt::JwtTokenUtils;

/// Who is making the request, as read from its bearer token.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    pub identity: Option<Identity>,
    pub access_token: Option<String>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        SessionContext::default()
    }

    /// The caller's session, rebuilt from the verified token.
    pub fn session(&self) -> Option<Session> {
        let (identity, token) = (self.identity.as_ref()?, self.access_token.as_ref()?);
        Some(Session {
            access_token: token.clone(),
            refresh_token: None,
            expires_in: None,
            token_type: "bearer".to_string(),
            user: AuthUser {
                id: identity.id,
                email: identity.email.clone(),
                user_metadata: None,
            },
        })
    }
}

pub struct SessionAuthState {
    pub jwt_utils: Arc<dyn JwtTokenUtils>,
}

/// A token that does not verify (expired, forged, malformed) is treated the
/// same as no token: the request goes on as anonymous.
pub async fn session_context(
    State(state): State<Arc<SessionAuthState>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .map(|v| v.to_str().map(str::to_string));

    let context = match header {
        None => SessionContext::anonymous(),
        Some(Err(_)) => {
            warn!("Authorization header is not valid text, continuing as anonymous");
            SessionContext::anonymous()
        }
        Some(Ok(header)) => {
            let verified = state
                .jwt_utils
                .extract_token_from_header(&header)
                .and_then(|token| state.jwt_utils.identity_from_token(&token).map(|id| (id, token)));
            match verified {
                Ok((identity, token)) => {
                    debug!(user_id = %identity.id, "Request carries a session");
                    SessionContext {
                        identity: Some(identity),
                        access_token: Some(token),
                    }
                }
                Err(e) => {
                    warn!("Rejected access token, continuing as anonymous: {}", e);
                    SessionContext::anonymous()
                }
            }
        }
    };

    req.extensions_mut().insert(context);
    next.run(req).await
}
