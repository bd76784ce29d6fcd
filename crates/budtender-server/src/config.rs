//! Configuration loaded once from environment variables and injected at
//! router construction, so handlers never perform ambient lookups.

use std::env;

/// Server configuration.
///
/// The gateway credential is optional on purpose: its absence is a
/// per-request configuration fault (each request answers 500), not a
/// startup failure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Bearer credential for the completion service.
    pub api_key: Option<String>,
    /// Override for the completion-service base URL.
    pub base_url: Option<String>,
    /// Override for the model identifier.
    pub model: Option<String>,
}

const DEFAULT_PORT: u16 = 8080;

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            api_key: env::var("AI_GATEWAY_API_KEY").ok().filter(|v| !v.is_empty()),
            base_url: env::var("AI_GATEWAY_BASE_URL").ok(),
            model: env::var("AI_GATEWAY_MODEL").ok(),
        }
    }
}
