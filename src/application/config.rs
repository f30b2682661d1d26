use crate::constants::{DEFAULT_RATE_LIMIT, DEFAULT_RATE_LIMIT_PERIOD_SECONDS, DEFAULT_TIMEOUT_SECONDS};
use crate::utils::config::{get_env_flag, get_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
/// API token used to authenticate against BookStack
pub struct Credentials {
    /// Token ID shown in the user's API token settings
    pub token_id: String,
    /// Token secret shown once when the token is created
    pub token_secret: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the BookStack instance, without the `/api` segment
    pub base_url: String,
    /// Timeout in seconds for a single request
    pub timeout: u64,
    /// Skip TLS certificate verification for this client only
    pub insecure: bool,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests admitted per period
    pub max_requests: u32,
    /// Length of the period in seconds
    pub period_seconds: u64,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT,
            period_seconds: DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
        }
    }
}

impl RateLimiterConfig {
    /// Creates a config admitting `max_requests` per second
    #[must_use]
    pub fn per_second(max_requests: u32) -> Self {
        Self {
            max_requests,
            period_seconds: 1,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the BookStack client
pub struct Config {
    /// API token
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration
    pub rate_limiter: RateLimiterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads a `.env` file when present and reads:
    ///
    /// * `BOOKSTACK_URL`
    /// * `BOOKSTACK_TOKEN_ID`, `BOOKSTACK_TOKEN_SECRET`
    /// * `BOOKSTACK_TIMEOUT` (seconds, default 30)
    /// * `BOOKSTACK_INSECURE` (default false)
    /// * `BOOKSTACK_RATE_LIMIT_MAX_REQUESTS` (default 180)
    /// * `BOOKSTACK_RATE_LIMIT_PERIOD_SECONDS` (default 1)
    ///
    /// Missing values are logged but not rejected: an unusable URL or token
    /// only fails once a request is sent.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_or_default("BOOKSTACK_URL", String::new());
        let token_id = get_env_or_default("BOOKSTACK_TOKEN_ID", String::new());
        let token_secret = get_env_or_default("BOOKSTACK_TOKEN_SECRET", String::new());

        if base_url.is_empty() {
            warn!("BOOKSTACK_URL not found in environment variables or .env file");
        }
        if token_id.is_empty() || token_secret.is_empty() {
            warn!("BOOKSTACK_TOKEN_ID or BOOKSTACK_TOKEN_SECRET not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                token_id,
                token_secret,
            },
            rest_api: RestApiConfig {
                base_url,
                timeout: get_env_or_default("BOOKSTACK_TIMEOUT", DEFAULT_TIMEOUT_SECONDS),
                insecure: get_env_flag("BOOKSTACK_INSECURE", false),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "BOOKSTACK_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_RATE_LIMIT,
                ),
                period_seconds: get_env_or_default(
                    "BOOKSTACK_RATE_LIMIT_PERIOD_SECONDS",
                    DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
                ),
            },
        }
    }

    /// Creates a configuration from explicit values, ignoring the environment
    pub fn with_token(
        base_url: impl Into<String>,
        token_id: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Self {
        Config {
            credentials: Credentials {
                token_id: token_id.into(),
                token_secret: token_secret.into(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECONDS,
                insecure: false,
            },
            rate_limiter: RateLimiterConfig::default(),
        }
    }
}
