//! Client for the hosted auth + data service.
//!
//! Auth calls go to the `/auth/v1` endpoints, table access to `/rest/v1`.
//! Every request carries the project's anon key as `apikey`; table requests
//! are authorized with the caller's access token when there is one so the
//! service's row-level policies see the right user.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::config::BackendConfig;
use crate::dto::auth_dto::SignUpRequest;
use crate::model::session::{AuthUser, Session};

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned {status}: {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Unexpected backend response: {0}")]
    Decode(String),

    #[error("Backend configuration error: {0}")]
    Config(String),
}

impl BackendError {
    /// Machine-readable error code, when the service sent one.
    pub fn code(&self) -> Option<&str> {
        match self {
            BackendError::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Message as the service worded it; other variants use their display text.
    pub fn message(&self) -> String {
        match self {
            BackendError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Api { status, .. } => Some(*status),
            BackendError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// The different error shapes the auth and REST endpoints answer with.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    error_code: Option<String>,
    code: Option<serde_json::Value>,
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ApiErrorBody {
    fn into_error(self, status: u16, fallback: &str) -> BackendError {
        let code = self
            .error_code
            .or_else(|| self.code.as_ref().and_then(|c| c.as_str().map(str::to_string)));
        let message = self
            .msg
            .or(self.message)
            .or(self.error_description)
            .or(self.error)
            .unwrap_or_else(|| fallback.to_string());
        BackendError::Api { status, code, message }
    }
}

/// Auth operations consumed from the hosted service.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, BackendError>;
    /// `None` when the account still has to confirm its e-mail address.
    async fn sign_up(&self, request: &SignUpRequest) -> Result<Option<Session>, BackendError>;
    async fn sign_out(&self, access_token: &str) -> Result<(), BackendError>;
    async fn get_user(&self, access_token: &str) -> Result<AuthUser, BackendError>;
    async fn refresh_session(&self, refresh_token: &str) -> Result<Session, BackendError>;
}

#[derive(Debug, Clone)]
pub struct HostedBackend {
    client: Client,
    pub config: BackendConfig,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshGrant<'a> {
    refresh_token: &'a str,
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

#[derive(Serialize)]
struct SignUpMetadata<'a> {
    full_name: &'a str,
    company: Option<&'a str>,
    phone: Option<&'a str>,
}

impl HostedBackend {
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        config.validate().map_err(|e| {
            error!("Backend configuration validation failed: {}", e);
            BackendError::Config(e.to_string())
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(&config.anon_key)
                .map_err(|_| BackendError::Config("anon key is not a valid header value".to_string()))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("akaa-site/0.1")
            .build()?;

        info!(url = %config.url, "Hosted backend client initialized");
        Ok(HostedBackend { client, config })
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.url, path)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.url, table)
    }

    fn bearer(&self, access_token: Option<&str>) -> String {
        format!("Bearer {}", access_token.unwrap_or(&self.config.anon_key))
    }

    async fn check(response: Response) -> Result<Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = parse_api_error(status.as_u16(), &body);
        debug!(status = status.as_u16(), code = ?err.code(), "Backend request rejected");
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| BackendError::Decode(e.to_string()))
    }

    /// Inserts one row without asking for it back.
    #[instrument(skip(self, row, access_token), fields(table = %table))]
    pub async fn insert_row<T: Serialize + ?Sized + Sync>(
        &self,
        table: &str,
        row: &T,
        access_token: Option<&str>,
    ) -> Result<(), BackendError> {
        debug!("Inserting row");
        let response = self
            .client
            .post(self.rest_url(table))
            .header(AUTHORIZATION, self.bearer(access_token))
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Selects rows; `filters` are PostgREST query pairs such as `("user_id", "eq.<id>")`.
    #[instrument(skip(self, access_token), fields(table = %table))]
    pub async fn select_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[(&str, String)],
        access_token: Option<&str>,
    ) -> Result<Vec<T>, BackendError> {
        debug!("Selecting rows");
        let mut query: Vec<(&str, String)> = vec![("select", "*".to_string())];
        query.extend(filters.iter().cloned());
        let response = self
            .client
            .get(self.rest_url(table))
            .header(AUTHORIZATION, self.bearer(access_token))
            .query(&query)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl AuthBackend for HostedBackend {
    #[instrument(skip(self, password), fields(email = %email))]
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, BackendError> {
        debug!("Requesting password grant");
        let response = self
            .client
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .json(&PasswordGrant { email, password })
            .send()
            .await?;
        let response = Self::check(response).await?;
        Self::decode(response).await
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn sign_up(&self, request: &SignUpRequest) -> Result<Option<Session>, BackendError> {
        debug!("Requesting sign-up");
        let body = SignUpBody {
            email: &request.email,
            password: &request.password,
            data: SignUpMetadata {
                full_name: &request.full_name,
                company: request.company.as_deref(),
                phone: request.phone.as_deref(),
            },
        };
        let response = self
            .client
            .post(self.auth_url("signup"))
            .query(&[("redirect_to", request.redirect_to.as_str())])
            .json(&body)
            .send()
            .await?;
        let response = Self::check(response).await?;
        let value: serde_json::Value = Self::decode(response).await?;

        // With e-mail confirmation on, only the user object comes back.
        if value.get("access_token").is_some() {
            let session = serde_json::from_value(value).map_err(|e| BackendError::Decode(e.to_string()))?;
            Ok(Some(session))
        } else {
            Ok(None)
        }
    }

    #[instrument(skip(self, access_token))]
    async fn sign_out(&self, access_token: &str) -> Result<(), BackendError> {
        debug!("Revoking session");
        let response = self
            .client
            .post(self.auth_url("logout"))
            .header(AUTHORIZATION, self.bearer(Some(access_token)))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    #[instrument(skip(self, access_token))]
    async fn get_user(&self, access_token: &str) -> Result<AuthUser, BackendError> {
        debug!("Fetching current user");
        let response = self
            .client
            .get(self.auth_url("user"))
            .header(AUTHORIZATION, self.bearer(Some(access_token)))
            .send()
            .await?;
        let response = Self::check(response).await?;
        Self::decode(response).await
    }

    #[instrument(skip(self, refresh_token))]
    async fn refresh_session(&self, refresh_token: &str) -> Result<Session, BackendError> {
        debug!("Requesting refresh grant");
        let response = self
            .client
            .post(self.auth_url("token"))
            .query(&[("grant_type", "refresh_token")])
            .json(&RefreshGrant { refresh_token })
            .send()
            .await?;
        let response = Self::check(response).await?;
        Self::decode(response).await
    }
}

/// Turns an error response body into `BackendError::Api`, whatever shape it has.
pub fn parse_api_error(status: u16, body: &str) -> BackendError {
    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
    let fallback = reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("request failed");
    parsed.into_error(status, fallback)
}
