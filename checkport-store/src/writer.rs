//! Timestamped output files.
//!
//! Every file of a run shares one timestamp: `<basename>_<YYYYMMDD-HHMMSS>.<ext>`.

use chrono::{DateTime, Utc};
use checkport_core::{ExportSummary, OutputFormat};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::StoreError;
use crate::persistence::{ensure_dir, write_text};
use crate::serializers::{to_csv, to_pretty_json};

/// Timestamp format used in file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Basename of the run summary file.
pub const SUMMARY_BASENAME: &str = "export-summary";

/// Writes the files of one export run.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    dir: PathBuf,
    format: OutputFormat,
    timestamp: String,
}

impl OutputWriter {
    /// Creates a writer for a run started at `run_started`.
    pub fn new(dir: impl Into<PathBuf>, format: OutputFormat, run_started: DateTime<Utc>) -> Self {
        Self {
            dir: dir.into(),
            format,
            timestamp: run_started.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Run timestamp as used in file names.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Returns the path for a basename and extension.
    pub fn path_for(&self, basename: &str, extension: &str) -> PathBuf {
        self.dir
            .join(format!("{basename}_{}.{extension}", self.timestamp))
    }

    /// Ensures the output directory exists. Returns `true` if it was created.
    pub async fn prepare(&self) -> Result<bool, StoreError> {
        let created = ensure_dir(&self.dir).await?;
        if created {
            info!(path = %self.dir.display(), "Created output directory");
        }
        Ok(created)
    }

    /// Writes `data` in the configured format(s).
    ///
    /// Returns the written paths, JSON first.
    pub async fn write<T: Serialize + ?Sized + Sync>(
        &self,
        basename: &str,
        data: &T,
    ) -> Result<Vec<PathBuf>, StoreError> {
        let mut written = Vec::new();

        if self.format.writes_json() {
            let path = self.path_for(basename, "json");
            write_text(&path, &to_pretty_json(data)?).await?;
            written.push(path);
        }

        if self.format.writes_csv() {
            let path = self.path_for(basename, "csv");
            write_text(&path, &to_csv(data)?).await?;
            written.push(path);
        }

        Ok(written)
    }

    /// Writes pre-rendered text regardless of the configured format.
    pub async fn write_raw(
        &self,
        basename: &str,
        extension: &str,
        content: &str,
    ) -> Result<PathBuf, StoreError> {
        let path = self.path_for(basename, extension);
        write_text(&path, content).await?;
        Ok(path)
    }

    /// Writes the run summary as JSON.
    pub async fn write_summary(&self, summary: &ExportSummary) -> Result<PathBuf, StoreError> {
        let path = self.path_for(SUMMARY_BASENAME, "json");
        write_text(&path, &to_pretty_json(summary)?).await?;
        Ok(path)
    }
}
