//! Configuration module for the admin client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;

/// Default API base URL used when `ORGSITE_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Default upload limit for avatar and thumbnail images (5 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the REST backend, including the `/api` prefix
    pub api_base_url: String,
    /// Bearer token attached to every request, if set
    pub api_token: Option<String>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
    /// Largest accepted image upload in bytes
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            log_level: "info".to_string(),
            log_json: false,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("ORGSITE_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let api_token = env::var("ORGSITE_API_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        let log_level = env::var("ORGSITE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = env::var("ORGSITE_LOG_FORMAT")
            .map(|format| format.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let max_upload_bytes = match env::var("ORGSITE_MAX_UPLOAD_BYTES") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "Invalid ORGSITE_MAX_UPLOAD_BYTES {:?}, using {}",
                    raw,
                    DEFAULT_MAX_UPLOAD_BYTES
                );
                DEFAULT_MAX_UPLOAD_BYTES
            }),
            Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Self {
            api_base_url,
            api_token,
            log_level,
            log_json,
            max_upload_bytes,
        }
    }

    /// Build a configuration pointing at an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}
