//! Settings for the API client.

use checkport_core::ExportConfig;
use std::time::Duration;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection and query settings for [`crate::PingdomClient`].
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// API base path, e.g. `https://api.pingdom.com/api/3.1`.
    pub base_url: String,
    /// Bearer token.
    pub api_token: String,
    /// Ask list/detail endpoints for tag data.
    pub include_tags: bool,
    /// Ask the uptime detail endpoint for team data.
    pub include_teams: bool,
    /// Delay before every request, in milliseconds.
    pub request_delay_ms: i64,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientSettings {
    /// Creates settings for a base URL and token with default flags.
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
            include_tags: true,
            include_teams: true,
            request_delay_ms: 1000,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Derives client settings from the resolved export configuration.
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_token: config.api_token.clone(),
            include_tags: config.include_tags,
            include_teams: config.include_teams,
            request_delay_ms: config.request_delay_ms,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Sets the request delay.
    pub fn with_request_delay_ms(mut self, millis: i64) -> Self {
        self.request_delay_ms = millis;
        self
    }

    /// Sets the tag flag.
    pub fn with_include_tags(mut self, enabled: bool) -> Self {
        self.include_tags = enabled;
        self
    }

    /// Sets the team flag.
    pub fn with_include_teams(mut self, enabled: bool) -> Self {
        self.include_teams = enabled;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
