//! Progress events emitted during a run.
//!
//! The exporter never prints. It reports through an [`ExportSink`]; the CLI
//! plugs in [`TracingSink`], tests plug in a recorder.

use checkport_core::{CheckCategory, ExportMode};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, warn};

/// Something worth reporting happened.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportEvent {
    /// The run started.
    RunStarted {
        /// Mode of the run.
        mode: ExportMode,
        /// Output directory.
        output_dir: PathBuf,
    },
    /// The output directory did not exist and was created.
    OutputDirectoryCreated {
        /// Created directory.
        path: PathBuf,
    },
    /// A category was listed and filtered.
    Listed {
        /// Category.
        category: CheckCategory,
        /// Checks returned by the API.
        listed: usize,
        /// Checks kept by the status filter.
        retained: usize,
    },
    /// A category had nothing to export.
    CategorySkipped {
        /// Category.
        category: CheckCategory,
    },
    /// Per-item detail fetching started.
    DetailStarted {
        /// Category.
        category: CheckCategory,
        /// Items to fetch.
        total: usize,
    },
    /// Detail fetching progressed.
    Progress {
        /// Category.
        category: CheckCategory,
        /// Items fetched so far.
        processed: usize,
        /// Items to fetch.
        total: usize,
    },
    /// A non-fatal problem was recorded.
    Warning {
        /// Message as stored in the summary.
        message: String,
    },
    /// An error was recorded.
    Error {
        /// Message as stored in the summary.
        message: String,
    },
    /// A file was written.
    FileWritten {
        /// Written file.
        path: PathBuf,
    },
    /// The run finished.
    RunFinished {
        /// Total exported checks.
        total: usize,
        /// Wall-clock duration.
        duration: Duration,
    },
}

/// Receives export events.
pub trait ExportSink: Send + Sync {
    /// Handles one event.
    fn emit(&self, event: &ExportEvent);
}

/// Forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ExportSink for TracingSink {
    fn emit(&self, event: &ExportEvent) {
        match event {
            ExportEvent::RunStarted { mode, output_dir } => {
                info!(mode = %mode, output_dir = %output_dir.display(), "Starting export");
            }
            ExportEvent::OutputDirectoryCreated { path } => {
                info!(path = %path.display(), "Created output directory");
            }
            ExportEvent::Listed {
                category,
                listed,
                retained,
            } => {
                info!(category = %category, listed, retained, "Listed checks");
            }
            ExportEvent::CategorySkipped { category } => {
                info!(category = %category, "No checks to export");
            }
            ExportEvent::DetailStarted { category, total } => {
                info!(category = %category, total, "Fetching check details");
            }
            ExportEvent::Progress {
                category,
                processed,
                total,
            } => {
                info!(category = %category, "Processed {processed}/{total} {category} checks");
            }
            ExportEvent::Warning { message } => warn!("{message}"),
            ExportEvent::Error { message } => error!("{message}"),
            ExportEvent::FileWritten { path } => info!(path = %path.display(), "Exported"),
            ExportEvent::RunFinished { total, duration } => {
                info!(total, duration_secs = duration.as_secs_f64(), "Export finished");
            }
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ExportSink for NullSink {
    fn emit(&self, _event: &ExportEvent) {}
}
