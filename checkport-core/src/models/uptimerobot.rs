//! UptimeRobot bulk-import record.

use serde::Serialize;
use std::fmt;

/// Monitor type column of the UptimeRobot import file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum MonitorType {
    /// HTTP(s) monitor.
    #[default]
    #[serde(rename = "HTTP")]
    Http,
    /// ICMP ping monitor.
    Ping,
    /// TCP port monitor.
    Port,
}

impl MonitorType {
    /// Returns the label expected by the import format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "HTTP",
            Self::Ping => "Ping",
            Self::Port => "Port",
        }
    }
}

impl fmt::Display for MonitorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the UptimeRobot import file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UptimeRobotMonitor {
    pub monitor_type: MonitorType,
    pub friendly_name: String,
    pub url_or_ip: String,
    pub interval_seconds: i64,
    pub keyword_type: String,
    pub keyword_value: String,
    pub port: String,
}

impl Default for UptimeRobotMonitor {
    fn default() -> Self {
        Self {
            monitor_type: MonitorType::Http,
            friendly_name: String::new(),
            url_or_ip: String::new(),
            interval_seconds: 300,
            keyword_type: String::new(),
            keyword_value: String::new(),
            port: String::new(),
        }
    }
}
