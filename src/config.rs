use std::env;

/// Built-in default backend host, used when no environment override is set.
pub const DEFAULT_API_BASE_URL: &str = "https://tgworld.e-saloon.online";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Environment-level configuration. Every value has a built-in default, so
/// loading never fails; a bad override silently falls back.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend host, without a trailing slash.
    pub api_base_url: String,
    /// Transport-level timeout applied to every request.
    pub http_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            api_base_url: env::var("SHOWROOM_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            http_timeout_secs: env::var("SHOWROOM_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}
