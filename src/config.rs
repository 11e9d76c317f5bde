//! Environment-based configuration.
//!
//! The service is configured entirely from the process environment:
//!
//! - `ANTHROPIC_API_KEY` - provider credential; absence is not validated
//!   upfront and fails on the first gateway call
//! - `ZK_HOST` / `ZK_PORT` - bind address (default `0.0.0.0:8000`)
//! - `ZK_LOG_LEVEL` / `ZK_LOG_FORMAT` - logging (default `info` / `pretty`)

/// Service configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind host for the HTTP server.
    pub host: String,
    /// Bind port for the HTTP server.
    pub port: u16,
    /// Anthropic API credential. `None` is tolerated here; the provider
    /// fails lazily on first use.
    pub anthropic_api_key: Option<String>,
    /// Base log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log output format: "json" or "pretty".
    pub log_format: String,
}

impl Config {
    /// Load configuration from the environment, with defaults.
    pub fn from_env() -> Self {
        Self {
            host: env_or("ZK_HOST", "0.0.0.0"),
            port: std::env::var("ZK_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            log_level: env_or("ZK_LOG_LEVEL", "info"),
            log_format: env_or("ZK_LOG_FORMAT", "pretty"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
            anthropic_api_key: None,
            log_level: "info".into(),
            log_format: "pretty".into(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
