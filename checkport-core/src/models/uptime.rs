//! Uptime check types.
//!
//! Field names follow the monitoring API so exported JSON mirrors what the
//! API returned.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::check_type::CheckTypeVariant;
use super::de::null_as_default;

// ============================================================================
// Check Status
// ============================================================================

/// Normalized status of an uptime check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckStatus {
    /// The check is running and the target is reachable.
    Up,
    /// The target is unreachable.
    Down,
    /// The check has been paused by a user.
    Paused,
    /// Anything else, including statuses the API adds later.
    #[default]
    Unknown,
}

impl CheckStatus {
    /// Parses an API status string, ignoring case.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("up") {
            Self::Up
        } else if raw.eq_ignore_ascii_case("down") {
            Self::Down
        } else if raw.eq_ignore_ascii_case("paused") {
            Self::Paused
        } else {
            Self::Unknown
        }
    }

    /// Returns the lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Paused => "paused",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Uptime Check
// ============================================================================

/// A synthetic availability monitor.
///
/// The same struct is produced by the list endpoint and by the detail
/// endpoint; only the shape of [`UptimeCheck::check_type`] differs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UptimeCheck {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hostname: String,
    /// Raw status string (`up`, `down`, `paused`, `unknown`, ...).
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    /// Check resolution in minutes.
    #[serde(deserialize_with = "null_as_default")]
    pub resolution: i64,
    #[serde(rename = "type")]
    pub check_type: CheckTypeVariant,
    #[serde(deserialize_with = "null_as_default")]
    pub lasttesttime: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub lastresponsetime: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub created: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "null_as_default")]
    pub probe_filters: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ipv6: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub responsetime_threshold: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub custom_message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub integrationids: Vec<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub sendnotificationwhendown: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub notifyagainevery: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub notifywhenbackup: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub userids: Vec<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub teamids: Vec<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub paused: bool,
}

impl UptimeCheck {
    /// Returns the normalized status.
    pub fn status_kind(&self) -> CheckStatus {
        CheckStatus::parse(&self.status)
    }

    /// Returns true if the status is `up`, ignoring case.
    pub fn is_up(&self) -> bool {
        self.status_kind() == CheckStatus::Up
    }
}

/// A tag attached to an uptime check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub tag_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub count: i64,
}

// ============================================================================
// List Response
// ============================================================================

/// Response of the uptime check list endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UptimeChecksResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub checks: Vec<UptimeCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<CheckCounts>,
}

/// Count block of the uptime check list response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckCounts {
    #[serde(deserialize_with = "null_as_default")]
    pub total: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub limited: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub filtered: i64,
}
