//! Export error types.

use checkport_core::{CheckCategory, ExportSummary};
use checkport_fetch::FetchError;
use checkport_store::StoreError;
use thiserror::Error;

/// Errors that abort an export run.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Listing a category failed. The run stopped after this category.
    #[error("Failed to export {category} checks: {source}")]
    ListFailed {
        /// Category whose listing failed.
        category: CheckCategory,
        /// Underlying API error.
        #[source]
        source: FetchError,
        /// Summary as it stood when the run stopped.
        summary: Box<ExportSummary>,
    },

    /// The output directory could not be prepared.
    #[error("Output directory unavailable: {source}")]
    Output {
        /// Underlying storage error.
        #[source]
        source: StoreError,
        /// Summary holding the recorded failure.
        summary: Box<ExportSummary>,
    },
}

impl ExportError {
    /// Returns the summary as it stood when the run stopped.
    pub fn summary(&self) -> Option<&ExportSummary> {
        match self {
            Self::ListFailed { summary, .. } | Self::Output { summary, .. } => Some(summary),
        }
    }
}

/// Errors converting one check into an UptimeRobot monitor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Neither a hostname nor an absolute URL is available.
    #[error("uptime check {id} has no hostname or URL")]
    MissingTarget {
        /// Check id.
        id: i64,
    },

    /// `resolution * 60` does not fit the interval column.
    #[error("uptime check {id} has an out-of-range resolution ({resolution})")]
    IntervalOverflow {
        /// Check id.
        id: i64,
        /// Resolution in minutes.
        resolution: i64,
    },
}

impl ConvertError {
    /// Id of the check that failed to convert.
    pub fn check_id(&self) -> i64 {
        match self {
            Self::MissingTarget { id } | Self::IntervalOverflow { id, .. } => *id,
        }
    }
}
