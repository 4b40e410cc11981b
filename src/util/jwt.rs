use chrono::Utc;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::model::session::Identity;

/// Claims carried by an access token from the hosted auth service.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// User id
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    /// "authenticated" for signed-in users, "anon" for the public key
    #[serde(default)]
    pub role: Option<String>,
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("Failed to decode JWT token: {0}")]
    DecodingFailed(String),
    #[error("Token has expired")]
    TokenExpired,
    #[error("Invalid token format")]
    InvalidToken,
    #[error("Token subject is not a user id: {0}")]
    InvalidSubject(String),
}

pub trait JwtTokenUtils: Send + Sync {
    fn validate_access_token(&self, token: &str) -> Result<SessionClaims, JwtError>;
    fn extract_token_from_header(&self, auth_header: &str) -> Result<String, JwtError>;
    fn identity_from_token(&self, token: &str) -> Result<Identity, JwtError>;
}

#[derive(Debug, Clone)]
pub struct JwtTokenUtilsImpl {
    pub jwt_config: JwtConfig,
}

impl JwtTokenUtilsImpl {
    pub fn new(jwt_config: JwtConfig) -> Self {
        JwtTokenUtilsImpl { jwt_config }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[self.jwt_config.jwt_audience.as_str()]);
        if let Some(issuer) = &self.jwt_config.jwt_issuer {
            validation.set_issuer(&[issuer.as_str()]);
        }
        validation
    }
}

impl JwtTokenUtils for JwtTokenUtilsImpl {
    fn validate_access_token(&self, token: &str) -> Result<SessionClaims, JwtError> {
        debug!("Validating access token");

        let decoding_key = DecodingKey::from_secret(self.jwt_config.jwt_secret.as_bytes());
        match decode::<SessionClaims>(token, &decoding_key, &self.validation()) {
            Ok(token_data) => {
                let claims = token_data.claims;
                if claims.exp < Utc::now().timestamp() {
                    warn!("Token has expired for user: {}", claims.sub);
                    return Err(JwtError::TokenExpired);
                }
                debug!("Token validation successful for user: {}", claims.sub);
                Ok(claims)
            }
            Err(err) => {
                if matches!(err.kind(), jsonwebtoken::errors::ErrorKind::ExpiredSignature) {
                    warn!("Rejected expired access token");
                    return Err(JwtError::TokenExpired);
                }
                error!("Failed to decode JWT token: {}", err);
                Err(JwtError::DecodingFailed(err.to_string()))
            }
        }
    }

    fn extract_token_from_header(&self, auth_header: &str) -> Result<String, JwtError> {
        let token = auth_header
            .strip_prefix("Bearer ")
            .or_else(|| auth_header.strip_prefix("bearer "))
            .ok_or_else(|| {
                error!("Invalid authorization header format");
                JwtError::InvalidToken
            })?
            .trim();

        if token.is_empty() {
            error!("Empty token in authorization header");
            return Err(JwtError::InvalidToken);
        }
        Ok(token.to_string())
    }

    fn identity_from_token(&self, token: &str) -> Result<Identity, JwtError> {
        let claims = self.validate_access_token(token)?;
        let id = Uuid::parse_str(&claims.sub).map_err(|_| JwtError::InvalidSubject(claims.sub.clone()))?;
        Ok(Identity { id, email: claims.email })
    }
}
