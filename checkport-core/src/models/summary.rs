//! Run summary types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

// ============================================================================
// Check Category
// ============================================================================

/// The two families of checks the exporter handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckCategory {
    /// Uptime (availability) checks.
    Uptime,
    /// Transaction (scripted) checks.
    Transaction,
}

impl CheckCategory {
    /// Returns the lowercase label used in file names and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uptime => "uptime",
            Self::Transaction => "transaction",
        }
    }

    /// Basename of the summary listing file.
    pub fn summary_basename(&self) -> String {
        format!("{}-checks-summary", self.as_str())
    }

    /// Basename of the detailed listing file.
    pub fn detailed_basename(&self) -> String {
        format!("{}-checks-detailed", self.as_str())
    }

    /// How many processed items between progress notifications.
    pub fn progress_every(&self) -> usize {
        match self {
            Self::Uptime => 10,
            Self::Transaction => 5,
        }
    }
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Export Summary
// ============================================================================

/// Outcome of one export run.
///
/// Mutated throughout the run by the orchestrator and persisted once at the
/// end as `export-summary_<ts>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportSummary {
    /// When the run started (UTC).
    pub export_date: DateTime<Utc>,
    /// Uptime checks retained and exported.
    pub uptime_checks_exported: usize,
    /// Transaction checks retained and exported.
    pub transaction_checks_exported: usize,
    /// Sum of both category counts.
    pub total_checks_exported: usize,
    /// Wall-clock duration of the run, in seconds.
    #[serde(rename = "DurationSeconds")]
    pub duration_seconds: f64,
    /// Fatal annotations, in the order they occurred.
    pub errors: Vec<String>,
    /// Non-fatal problems, in the order they occurred.
    pub warnings: Vec<String>,
}

impl ExportSummary {
    /// Creates an empty summary for a run started at `export_date`.
    pub fn new(export_date: DateTime<Utc>) -> Self {
        Self {
            export_date,
            uptime_checks_exported: 0,
            transaction_checks_exported: 0,
            total_checks_exported: 0,
            duration_seconds: 0.0,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Records the exported count for a category and refreshes the total.
    pub fn set_exported(&mut self, category: CheckCategory, count: usize) {
        match category {
            CheckCategory::Uptime => self.uptime_checks_exported = count,
            CheckCategory::Transaction => self.transaction_checks_exported = count,
        }
        self.total_checks_exported = self.uptime_checks_exported + self.transaction_checks_exported;
    }

    /// Returns the exported count for a category.
    pub fn exported(&self, category: CheckCategory) -> usize {
        match category {
            CheckCategory::Uptime => self.uptime_checks_exported,
            CheckCategory::Transaction => self.transaction_checks_exported,
        }
    }

    /// Appends a non-fatal warning.
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Appends a fatal annotation.
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    /// Stamps the run duration.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_seconds = duration.as_secs_f64();
    }

    /// Returns true if any error was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl Default for ExportSummary {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_tracks_both_categories() {
        let mut summary = ExportSummary::default();
        summary.set_exported(CheckCategory::Uptime, 3);
        assert_eq!(summary.total_checks_exported, 3);

        summary.set_exported(CheckCategory::Transaction, 4);
        assert_eq!(summary.total_checks_exported, 7);

        summary.set_exported(CheckCategory::Uptime, 1);
        assert_eq!(summary.total_checks_exported, 5);
        assert_eq!(summary.exported(CheckCategory::Transaction), 4);
    }

    #[test]
    fn test_messages_keep_order() {
        let mut summary = ExportSummary::default();
        summary.add_warning("first");
        summary.add_warning("second");
        summary.add_error("boom");

        assert_eq!(summary.warnings, ["first", "second"]);
        assert!(summary.has_errors());
    }

    #[test]
    fn test_json_field_names() {
        let mut summary = ExportSummary::default();
        summary.set_duration(Duration::from_millis(1500));
        let value = serde_json::to_value(&summary).unwrap();

        for key in [
            "ExportDate",
            "UptimeChecksExported",
            "TransactionChecksExported",
            "TotalChecksExported",
            "DurationSeconds",
            "Errors",
            "Warnings",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["DurationSeconds"], 1.5);
    }

    #[test]
    fn test_category_basenames() {
        assert_eq!(CheckCategory::Uptime.summary_basename(), "uptime-checks-summary");
        assert_eq!(
            CheckCategory::Transaction.detailed_basename(),
            "transaction-checks-detailed"
        );
        assert_eq!(CheckCategory::Uptime.progress_every(), 10);
        assert_eq!(CheckCategory::Transaction.progress_every(), 5);
    }
}
