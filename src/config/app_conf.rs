use std::env;

pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Public origin of the site, used as the e-mail confirmation redirect target
    pub site_origin: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        let site_origin = env::var("SITE_ORIGIN")
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| format!("http://localhost:{}", port));
        AppConfig { host, port, site_origin }
    }
}
