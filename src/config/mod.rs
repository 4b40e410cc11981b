pub mod app_conf;
pub mod backend_conf;
pub mod jwt_conf;


pub use app_conf::AppConfig;
pub use backend_conf::BackendConfig;
pub use jwt_conf::JwtConfig;

/// Common configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
