//! Conversion of uptime checks into an UptimeRobot bulk-import file.
//!
//! Conversion prefers the detail shape of the check type (exact URL, port,
//! keyword) and falls back to the hostname when only the list shape is
//! available.

use checkport_core::{CheckTypeVariant, MonitorType, UptimeCheck, UptimeRobotMonitor};
use checkport_store::quote_field;
use serde_json::Value;
use tracing::debug;

use crate::error::ConvertError;

/// Header line of the import file. Fixed by the import contract.
pub const IMPORT_HEADER: &str =
    "Type,\"Friendly Name\",URL/IP,Interval,\"Keyword Type\",\"Keyword Value\",Port";

/// Basename of the import file.
pub const IMPORT_BASENAME: &str = "uptimerobot-import";

/// Shortest interval the import accepts, in seconds.
pub const MIN_INTERVAL_SECONDS: i64 = 60;

const HTTPS_DEFAULT_PORT: i64 = 443;
const HTTP_DEFAULT_PORT: i64 = 80;

/// Result of converting a batch.
#[derive(Debug, Default)]
pub struct Conversion {
    /// Successfully converted monitors, in input order.
    pub monitors: Vec<UptimeRobotMonitor>,
    /// Checks that were skipped.
    pub failures: Vec<ConvertError>,
}

/// Maps uptime checks to UptimeRobot monitors.
#[derive(Debug, Clone, Copy, Default)]
pub struct UptimeRobotConverter;

impl UptimeRobotConverter {
    /// Converts a batch. A failing check is skipped, the rest still convert.
    pub fn convert_all(&self, checks: &[UptimeCheck]) -> Conversion {
        let mut conversion = Conversion::default();
        for check in checks {
            match self.convert(check) {
                Ok(monitor) => conversion.monitors.push(monitor),
                Err(e) => {
                    debug!(id = check.id, error = %e, "Skipping check");
                    conversion.failures.push(e);
                }
            }
        }
        conversion
    }

    /// Converts one check.
    pub fn convert(&self, check: &UptimeCheck) -> Result<UptimeRobotMonitor, ConvertError> {
        let monitor_type = monitor_type(&check.check_type);
        let interval_seconds = interval_seconds(check)?;

        let url_or_ip = match monitor_type {
            MonitorType::Http => http_target(check)?,
            MonitorType::Ping | MonitorType::Port => {
                if check.hostname.is_empty() {
                    return Err(ConvertError::MissingTarget { id: check.id });
                }
                check.hostname.clone()
            }
        };

        let port = if monitor_type == MonitorType::Port {
            check
                .check_type
                .lookup("tcp", "port")
                .map(value_text)
                .unwrap_or_default()
        } else {
            String::new()
        };

        let (keyword_type, keyword_value) = keyword(&check.check_type);

        Ok(UptimeRobotMonitor {
            monitor_type,
            friendly_name: check.name.clone(),
            url_or_ip,
            interval_seconds,
            keyword_type,
            keyword_value,
            port,
        })
    }
}

/// Renders the import file: the fixed header plus one row per monitor.
pub fn render_import_csv(monitors: &[UptimeRobotMonitor]) -> String {
    let mut out = String::from(IMPORT_HEADER);
    out.push('\n');
    for monitor in monitors {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            quote_field(monitor.monitor_type.as_str()),
            quote_field(&monitor.friendly_name),
            quote_field(&monitor.url_or_ip),
            monitor.interval_seconds,
            quote_field(&monitor.keyword_type),
            quote_field(&monitor.keyword_value),
            quote_field(&monitor.port),
        ));
    }
    out
}

// ============================================================================
// Field mapping
// ============================================================================

fn monitor_type(check_type: &CheckTypeVariant) -> MonitorType {
    let hint = check_type.kind_hint();
    if hint.contains("http") {
        MonitorType::Http
    } else if hint.contains("ping") {
        MonitorType::Ping
    } else if hint.contains("tcp") {
        MonitorType::Port
    } else {
        MonitorType::Http
    }
}

fn interval_seconds(check: &UptimeCheck) -> Result<i64, ConvertError> {
    let seconds = check
        .resolution
        .checked_mul(60)
        .ok_or(ConvertError::IntervalOverflow {
            id: check.id,
            resolution: check.resolution,
        })?;
    Ok(seconds.max(MIN_INTERVAL_SECONDS))
}

fn http_target(check: &UptimeCheck) -> Result<String, ConvertError> {
    let host = check.hostname.as_str();

    if let Some(url) = check.check_type.lookup_str("http", "url") {
        if is_absolute_url(url) {
            return Ok(url.to_string());
        }
        if !host.is_empty() {
            let encrypted = check
                .check_type
                .lookup("http", "encryption")
                .and_then(Value::as_bool)
                != Some(false);
            let scheme = if encrypted { "https" } else { "http" };

            if url.starts_with('/') {
                let default_port = if encrypted {
                    HTTPS_DEFAULT_PORT
                } else {
                    HTTP_DEFAULT_PORT
                };
                let port = check
                    .check_type
                    .lookup("http", "port")
                    .and_then(port_number)
                    .filter(|p| *p > 0 && *p != default_port);
                return Ok(match port {
                    Some(port) => format!("{scheme}://{host}:{port}{url}"),
                    None => format!("{scheme}://{host}{url}"),
                });
            }

            return Ok(format!(
                "{scheme}://{host}/{}",
                url.trim_start_matches('/')
            ));
        }
    }

    if is_absolute_url(host) {
        Ok(host.to_string())
    } else if host.is_empty() {
        Err(ConvertError::MissingTarget { id: check.id })
    } else {
        Ok(format!("https://{host}"))
    }
}

fn keyword(check_type: &CheckTypeVariant) -> (String, String) {
    if let Some(value) = check_type.lookup_str("http", "shouldcontain") {
        ("exists".to_string(), value.to_string())
    } else if let Some(value) = check_type.lookup_str("http", "shouldnotcontain") {
        ("not exists".to_string(), value.to_string())
    } else {
        (String::new(), String::new())
    }
}

fn is_absolute_url(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

// Ports show up as numbers or numeric strings depending on the check age.
fn port_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
