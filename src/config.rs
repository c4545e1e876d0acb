// ============================================================================
// CONFIG - Compile-time configuration (option_env! + .env via build.rs)
// ============================================================================

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOGIN_ENDPOINT: &str = "/login";
pub const DEFAULT_UPLOAD_ENDPOINT: &str = "/upload";
pub const DEFAULT_STATUS_ENDPOINT: &str = "/status";
pub const DEFAULT_ANALYSIS_PATH: &str = "/analysis";
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 2_000;
pub const DEFAULT_FAILED_REDIRECT_DELAY_MS: u32 = 3_000;
pub const DEFAULT_STATUS_REQUEST_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Empty means same origin as the page.
    pub backend_url: String,
    pub login_endpoint: String,
    pub upload_endpoint: String,
    pub status_endpoint: String,
    /// Path on which the status poller activates.
    pub analysis_path: String,
    pub poll_interval_ms: u32,
    pub failed_redirect_delay_ms: u32,
    pub status_request_timeout_ms: u32,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            login_endpoint: DEFAULT_LOGIN_ENDPOINT.to_string(),
            upload_endpoint: DEFAULT_UPLOAD_ENDPOINT.to_string(),
            status_endpoint: DEFAULT_STATUS_ENDPOINT.to_string(),
            analysis_path: DEFAULT_ANALYSIS_PATH.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            failed_redirect_delay_ms: DEFAULT_FAILED_REDIRECT_DELAY_MS,
            status_request_timeout_ms: DEFAULT_STATUS_REQUEST_TIMEOUT_MS,
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Builds the configuration from variables captured at compile time.
    pub fn from_env() -> Self {
        Self::from_values(|key| match key {
            "BACKEND_URL" => option_env!("BACKEND_URL"),
            "LOGIN_ENDPOINT" => option_env!("LOGIN_ENDPOINT"),
            "UPLOAD_ENDPOINT" => option_env!("UPLOAD_ENDPOINT"),
            "STATUS_ENDPOINT" => option_env!("STATUS_ENDPOINT"),
            "ANALYSIS_PATH" => option_env!("ANALYSIS_PATH"),
            "POLL_INTERVAL_MS" => option_env!("POLL_INTERVAL_MS"),
            "FAILED_REDIRECT_DELAY_MS" => option_env!("FAILED_REDIRECT_DELAY_MS"),
            "STATUS_REQUEST_TIMEOUT_MS" => option_env!("STATUS_REQUEST_TIMEOUT_MS"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            _ => None,
        })
    }

    /// Builds the configuration from a key lookup, falling back to defaults
    /// for missing or unparsable values.
    pub fn from_values<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let defaults = Self::default();
        let text = |key: &str, default: String| {
            lookup(key)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .unwrap_or(default)
        };

        Self {
            backend_url: lookup("BACKEND_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            login_endpoint: text("LOGIN_ENDPOINT", defaults.login_endpoint),
            upload_endpoint: text("UPLOAD_ENDPOINT", defaults.upload_endpoint),
            status_endpoint: text("STATUS_ENDPOINT", defaults.status_endpoint),
            analysis_path: text("ANALYSIS_PATH", defaults.analysis_path),
            poll_interval_ms: parse_or(lookup("POLL_INTERVAL_MS"), defaults.poll_interval_ms),
            failed_redirect_delay_ms: parse_or(
                lookup("FAILED_REDIRECT_DELAY_MS"),
                defaults.failed_redirect_delay_ms,
            ),
            status_request_timeout_ms: parse_or(
                lookup("STATUS_REQUEST_TIMEOUT_MS"),
                defaults.status_request_timeout_ms,
            ),
            enable_logging: parse_or(lookup("ENABLE_LOGGING"), defaults.enable_logging),
        }
    }

    /// Full URL for an endpoint path.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }

    pub fn login_url(&self) -> String {
        self.endpoint_url(&self.login_endpoint)
    }

    pub fn upload_url(&self) -> String {
        self.endpoint_url(&self.upload_endpoint)
    }

    pub fn status_url(&self) -> String {
        self.endpoint_url(&self.status_endpoint)
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<&str>, default: T) -> T {
    value
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
