//! Resolved export configuration.
//!
//! [`ExportConfig`] is the single value the exporter consumes. Merging of
//! defaults, config files, environment and command line happens elsewhere.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::CoreError;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.pingdom.com/api/3.1";

/// Placeholder token shipped in sample config files.
pub const PLACEHOLDER_TOKEN: &str = "YOUR_PINGDOM_API_TOKEN_HERE";

// ============================================================================
// Export Mode
// ============================================================================

/// What a run exports. Fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExportMode {
    /// List-only export.
    Summary,
    /// List plus per-item detail.
    #[default]
    Full,
    /// List plus UptimeRobot import file.
    UptimeRobot,
}

impl ExportMode {
    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::Full => "Full",
            Self::UptimeRobot => "UptimeRobot",
        }
    }
}

impl FromStr for ExportMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "summary" => Ok(Self::Summary),
            "full" => Ok(Self::Full),
            "uptimerobot" => Ok(Self::UptimeRobot),
            other => Err(CoreError::InvalidConfig(format!(
                "unknown export mode '{other}' (expected Full, Summary or UptimeRobot)"
            ))),
        }
    }
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Output Format
// ============================================================================

/// Which serializers run for each exported listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// Flattened CSV.
    Csv,
    /// JSON and CSV.
    Both,
}

impl OutputFormat {
    /// Returns true if JSON files are written.
    pub fn writes_json(&self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }

    /// Returns true if CSV files are written.
    pub fn writes_csv(&self) -> bool {
        matches!(self, Self::Csv | Self::Both)
    }

    /// Returns the lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Both => "both",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "both" => Ok(Self::Both),
            other => Err(CoreError::InvalidConfig(format!(
                "unknown output format '{other}' (expected json, csv or both)"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Export Config
// ============================================================================

/// Fully resolved configuration for one export run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// Bearer token for the monitoring API.
    pub api_token: String,
    /// API base path; endpoints are resolved relative to it.
    pub base_url: String,
    /// Directory receiving all output files.
    pub output_directory: PathBuf,
    /// Whether uptime checks are exported.
    pub export_uptime_checks: bool,
    /// Whether transaction checks are exported.
    pub export_transaction_checks: bool,
    /// Request tag data (`include_tags` / `extended_tags`).
    pub include_tags: bool,
    /// Request team data on uptime detail calls.
    pub include_teams: bool,
    /// Keep uptime checks whose status is not `up`.
    pub include_disabled_checks: bool,
    /// Output serializers.
    pub output_format: OutputFormat,
    /// Export mode.
    pub export_mode: ExportMode,
    /// Delay before every request, in milliseconds. Zero or negative disables it.
    pub request_delay_ms: i64,
    /// Skip the interactive confirmation.
    pub auto_mode: bool,
    /// Verbose logging.
    pub verbose_mode: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            output_directory: PathBuf::from("exports"),
            export_uptime_checks: true,
            export_transaction_checks: true,
            include_tags: true,
            include_teams: true,
            include_disabled_checks: false,
            output_format: OutputFormat::Json,
            export_mode: ExportMode::Full,
            request_delay_ms: 1000,
            auto_mode: false,
            verbose_mode: false,
        }
    }
}

impl ExportConfig {
    /// Checks that the token is present and not the sample placeholder.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.api_token.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "API token is required. Set ApiToken in the config file, PINGDOM_ApiToken in the environment, or pass --api-token".to_string(),
            ));
        }
        if self.api_token == PLACEHOLDER_TOKEN {
            return Err(CoreError::InvalidConfig(
                "replace the placeholder API token with your actual Pingdom API token".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the token with all but the last four characters masked.
    pub fn masked_token(&self) -> String {
        let chars: Vec<char> = self.api_token.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let visible: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), visible)
    }
}
