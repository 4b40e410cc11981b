use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// Hosted auth/data service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Project URL, e.g. https://xyz.supabase.co
    pub url: String,
    /// Public (anon) API key sent as `apikey` on every request
    pub anon_key: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Table receiving quote requests
    pub quote_table: String,
    /// Table holding user profiles
    pub profile_table: String,
}

impl BackendConfig {
    /// Load backend configuration from environment variables
    ///
    /// Expected environment variables:
    /// - BACKEND_URL: project URL (required)
    /// - BACKEND_ANON_KEY: public API key (required)
    /// - BACKEND_TIMEOUT_SECS: request timeout (defaults to 10)
    /// - BACKEND_QUOTE_TABLE: quote table name (defaults to quote_requests)
    /// - BACKEND_PROFILE_TABLE: profile table name (defaults to profiles)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading backend configuration from environment variables");

        let url = env::var("BACKEND_URL").map_err(|_| {
            error!("BACKEND_URL environment variable not found");
            ConfigError::EnvVarNotFound("BACKEND_URL".to_string())
        })?;
        let url = url.trim_end_matches('/').to_string();
        debug!("Backend URL: {}", url);

        let anon_key = env::var("BACKEND_ANON_KEY").map_err(|_| {
            error!("BACKEND_ANON_KEY environment variable not found");
            ConfigError::EnvVarNotFound("BACKEND_ANON_KEY".to_string())
        })?;
        debug!("Backend anon key loaded (length: {} chars)", anon_key.len());

        let timeout_secs = env::var("BACKEND_TIMEOUT_SECS")
            .unwrap_or_else(|_| {
                warn!("BACKEND_TIMEOUT_SECS not set, using default: 10 seconds");
                "10".to_string()
            })
            .parse::<u64>()
            .map_err(|e| {
                error!("Invalid BACKEND_TIMEOUT_SECS value: {}", e);
                ConfigError::ParseError(format!("BACKEND_TIMEOUT_SECS: {}", e))
            })?;

        let quote_table = env::var("BACKEND_QUOTE_TABLE").unwrap_or_else(|_| "quote_requests".to_string());
        let profile_table = env::var("BACKEND_PROFILE_TABLE").unwrap_or_else(|_| "profiles".to_string());
        debug!("Backend tables: quotes={}, profiles={}", quote_table, profile_table);

        let config = BackendConfig {
            url,
            anon_key,
            timeout_secs,
            quote_table,
            profile_table,
        };
        config.validate()?;

        info!("Backend configuration loaded successfully");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        debug!("Validating backend configuration");

        let parsed = reqwest::Url::parse(&self.url)
            .map_err(|e| ConfigError::InvalidValue(format!("BACKEND_URL: {}", e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            error!("Backend URL must use http or https, got {}", parsed.scheme());
            return Err(ConfigError::ValidationError("BACKEND_URL must use http or https".to_string()));
        }

        if self.anon_key.trim().is_empty() {
            error!("Backend anon key cannot be empty");
            return Err(ConfigError::ValidationError("BACKEND_ANON_KEY cannot be empty".to_string()));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError("BACKEND_TIMEOUT_SECS must be greater than 0".to_string()));
        }

        if self.quote_table.is_empty() || self.profile_table.is_empty() {
            return Err(ConfigError::ValidationError("Table names cannot be empty".to_string()));
        }

        debug!("Backend configuration validation passed");
        Ok(())
    }
}
