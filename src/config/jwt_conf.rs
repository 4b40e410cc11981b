use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// Settings for verifying access tokens issued by the hosted auth service
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared secret the hosted service signs tokens with
    pub jwt_secret: String,
    /// Expected `aud` claim
    pub jwt_audience: String,
    /// Expected `iss` claim (optional)
    pub jwt_issuer: Option<String>,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    ///
    /// Expected environment variables:
    /// - BACKEND_JWT_SECRET: secret used by the hosted service (required)
    /// - BACKEND_JWT_AUDIENCE: expected audience (defaults to "authenticated")
    /// - BACKEND_JWT_ISSUER: expected issuer (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading JWT configuration from environment variables");

        let jwt_secret = env::var("BACKEND_JWT_SECRET")
            .map_err(|_| {
                error!("BACKEND_JWT_SECRET environment variable not found");
                ConfigError::EnvVarNotFound("BACKEND_JWT_SECRET".to_string())
            })?;
        debug!("JWT secret loaded (length: {} chars)", jwt_secret.len());

        let jwt_audience = env::var("BACKEND_JWT_AUDIENCE").unwrap_or_else(|_| {
            warn!("BACKEND_JWT_AUDIENCE not set, using default: authenticated");
            "authenticated".to_string()
        });

        let jwt_issuer = env::var("BACKEND_JWT_ISSUER").ok();
        if let Some(ref issuer) = jwt_issuer {
            debug!("JWT issuer: {}", issuer);
        } else {
            debug!("No JWT issuer provided");
        }

        let config = JwtConfig {
            jwt_secret,
            jwt_audience,
            jwt_issuer,
        };
        config.validate()?;

        info!("JWT configuration loaded successfully");
        Ok(config)
    }

    /// Validate the JWT configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        debug!("Validating JWT configuration");

        if self.jwt_secret.len() < 32 {
            error!("JWT secret is too short (minimum 32 characters required)");
            return Err(ConfigError::ValidationError("BACKEND_JWT_SECRET must be at least 32 characters long".to_string()));
        }

        if self.jwt_audience.trim().is_empty() {
            error!("JWT audience cannot be empty");
            return Err(ConfigError::ValidationError("BACKEND_JWT_AUDIENCE cannot be empty".to_string()));
        }

        debug!("JWT configuration validation passed");
        Ok(())
    }
}

/// Configuration used by tests and local tooling
impl Default for JwtConfig {
    fn default() -> Self {
        JwtConfig {
            jwt_secret: "test_secret_key_for_jwt_testing_should_be_long_enough_for_security_purposes".to_string(),
            jwt_audience: "authenticated".to_string(),
            jwt_issuer: None,
        }
    }
}
