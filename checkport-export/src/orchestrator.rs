//! The export run.
//!
//! One [`Exporter::run`] call lists each enabled category, filters it,
//! enriches it according to the export mode and writes the results. Every
//! remote call and file write happens sequentially in listing order.

use chrono::Utc;
use checkport_core::{CheckCategory, ExportConfig, ExportMode, ExportSummary};
use checkport_fetch::{ApiClient, FetchError};
use checkport_store::{OutputWriter, SUMMARY_BASENAME};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument};

use crate::error::ExportError;
use crate::filter::StatusFilter;
use crate::sink::{ExportEvent, ExportSink, TracingSink};
use crate::uptimerobot::{IMPORT_BASENAME, UptimeRobotConverter, render_import_csv};

/// What to do with an item whose detail fetch failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OnDetailFailure {
    /// Leave it out of the result.
    Omit,
    /// Keep the listing record in its place.
    Substitute,
}

/// Runs exports against an [`ApiClient`].
pub struct Exporter {
    client: Arc<dyn ApiClient>,
    config: ExportConfig,
    filter: StatusFilter,
    converter: UptimeRobotConverter,
    sink: Arc<dyn ExportSink>,
}

impl Exporter {
    /// Creates an exporter that reports through [`TracingSink`].
    pub fn new(client: Arc<dyn ApiClient>, config: ExportConfig) -> Self {
        Self {
            filter: StatusFilter::new(config.include_disabled_checks),
            client,
            config,
            converter: UptimeRobotConverter,
            sink: Arc::new(TracingSink),
        }
    }

    /// Replaces the event sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn ExportSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Configuration of this exporter.
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Runs one export.
    ///
    /// Detail and write failures are recorded in the returned summary. A
    /// failed listing or an unusable output directory stops the run: the
    /// failure is recorded, the summary write is still attempted, and the
    /// summary is returned inside the error.
    #[instrument(skip(self), fields(mode = %self.config.export_mode))]
    pub async fn run(&self) -> Result<ExportSummary, ExportError> {
        let started = Instant::now();
        let mut summary = ExportSummary::new(Utc::now());
        let writer = OutputWriter::new(
            &self.config.output_directory,
            self.config.output_format,
            summary.export_date,
        );

        match writer.prepare().await {
            Ok(true) => self.sink.emit(&ExportEvent::OutputDirectoryCreated {
                path: writer.dir().to_path_buf(),
            }),
            Ok(false) => {}
            Err(source) => {
                self.fail(&mut summary, format!("Export failed: {source}"));
                summary.set_duration(started.elapsed());
                self.save_summary(&writer, &mut summary).await;
                return Err(ExportError::Output {
                    source,
                    summary: Box::new(summary),
                });
            }
        }
        self.sink.emit(&ExportEvent::RunStarted {
            mode: self.config.export_mode,
            output_dir: writer.dir().to_path_buf(),
        });

        if self.config.export_uptime_checks {
            if let Err(source) = self.export_uptime(&writer, &mut summary).await {
                return Err(self
                    .abort(CheckCategory::Uptime, source, &writer, summary, started)
                    .await);
            }
        }

        if self.config.export_transaction_checks {
            if let Err(source) = self.export_transactions(&writer, &mut summary).await {
                return Err(self
                    .abort(CheckCategory::Transaction, source, &writer, summary, started)
                    .await);
            }
        }

        summary.set_duration(started.elapsed());
        self.save_summary(&writer, &mut summary).await;
        self.sink.emit(&ExportEvent::RunFinished {
            total: summary.total_checks_exported,
            duration: started.elapsed(),
        });

        Ok(summary)
    }

    // ========================================================================
    // Categories
    // ========================================================================

    async fn export_uptime(
        &self,
        writer: &OutputWriter,
        summary: &mut ExportSummary,
    ) -> Result<(), FetchError> {
        let category = CheckCategory::Uptime;
        let listing = self.client.list_uptime_checks().await?;
        let listed = listing.checks.len();
        let retained = self.filter.apply_uptime(listing.checks);
        self.sink.emit(&ExportEvent::Listed {
            category,
            listed,
            retained: retained.len(),
        });

        if retained.is_empty() {
            self.sink.emit(&ExportEvent::CategorySkipped { category });
            summary.set_exported(category, 0);
            return Ok(());
        }

        self.persist(writer, summary, &category.summary_basename(), &retained)
            .await;
        summary.set_exported(category, retained.len());

        match self.config.export_mode {
            ExportMode::Summary => {}
            ExportMode::Full => {
                let detailed = self
                    .enrich(
                        category,
                        &retained,
                        |check| check.id,
                        move |id| self.client.get_uptime_check_detail(id),
                        OnDetailFailure::Omit,
                        summary,
                    )
                    .await;
                self.persist(writer, summary, &category.detailed_basename(), &detailed)
                    .await;
            }
            ExportMode::UptimeRobot => {
                let enriched = self
                    .enrich(
                        category,
                        &retained,
                        |check| check.id,
                        move |id| self.client.get_uptime_check_detail(id),
                        OnDetailFailure::Substitute,
                        summary,
                    )
                    .await;

                let conversion = self.converter.convert_all(&enriched);
                for failure in &conversion.failures {
                    self.warn(summary, format!("Skipped UptimeRobot conversion: {failure}"));
                }

                let csv = render_import_csv(&conversion.monitors);
                match writer.write_raw(IMPORT_BASENAME, "csv", &csv).await {
                    Ok(path) => self.sink.emit(&ExportEvent::FileWritten { path }),
                    Err(e) => self.fail(summary, format!("Failed to save {IMPORT_BASENAME}: {e}")),
                }
            }
        }

        Ok(())
    }

    async fn export_transactions(
        &self,
        writer: &OutputWriter,
        summary: &mut ExportSummary,
    ) -> Result<(), FetchError> {
        let category = CheckCategory::Transaction;
        let listing = self.client.list_transaction_checks().await?;
        let listed = listing.checks.len();
        let retained = self.filter.apply_transactions(listing.checks);
        self.sink.emit(&ExportEvent::Listed {
            category,
            listed,
            retained: retained.len(),
        });

        if retained.is_empty() {
            self.sink.emit(&ExportEvent::CategorySkipped { category });
            summary.set_exported(category, 0);
            return Ok(());
        }

        self.persist(writer, summary, &category.summary_basename(), &retained)
            .await;
        summary.set_exported(category, retained.len());

        // Transaction checks have no UptimeRobot counterpart; that mode
        // only gets the listing.
        if self.config.export_mode == ExportMode::Full {
            let detailed = self
                .enrich(
                    category,
                    &retained,
                    |check| check.id,
                    move |id| self.client.get_transaction_check_detail(id),
                    OnDetailFailure::Omit,
                    summary,
                )
                .await;
            self.persist(writer, summary, &category.detailed_basename(), &detailed)
                .await;
        }

        Ok(())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Fetches the detail of every item, one after another.
    async fn enrich<T, F, Fut>(
        &self,
        category: CheckCategory,
        items: &[T],
        id_of: impl Fn(&T) -> i64,
        fetch: F,
        on_failure: OnDetailFailure,
        summary: &mut ExportSummary,
    ) -> Vec<T>
    where
        T: Clone,
        F: Fn(i64) -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let total = items.len();
        let every = category.progress_every();
        let mut results = Vec::with_capacity(total);
        let mut processed = 0usize;

        self.sink.emit(&ExportEvent::DetailStarted { category, total });

        for item in items {
            let id = id_of(item);
            match fetch(id).await {
                Ok(detail) => {
                    debug!(category = %category, id, "Fetched detail");
                    results.push(detail);
                    processed += 1;
                    if processed % every == 0 {
                        self.sink.emit(&ExportEvent::Progress {
                            category,
                            processed,
                            total,
                        });
                    }
                }
                Err(e) => {
                    self.warn(
                        summary,
                        format!("Failed to fetch details for {category} check {id}: {e}"),
                    );
                    if on_failure == OnDetailFailure::Substitute {
                        results.push(item.clone());
                    }
                }
            }
        }

        results
    }

    /// Writes a listing in the configured formats. Failures are recorded.
    async fn persist<T: Serialize + ?Sized + Sync>(
        &self,
        writer: &OutputWriter,
        summary: &mut ExportSummary,
        basename: &str,
        data: &T,
    ) {
        match writer.write(basename, data).await {
            Ok(paths) => {
                for path in paths {
                    self.sink.emit(&ExportEvent::FileWritten { path });
                }
            }
            Err(e) => self.fail(summary, format!("Failed to save {basename}: {e}")),
        }
    }

    async fn save_summary(&self, writer: &OutputWriter, summary: &mut ExportSummary) {
        match writer.write_summary(summary).await {
            Ok(path) => self.sink.emit(&ExportEvent::FileWritten { path }),
            Err(e) => self.fail(summary, format!("Failed to save {SUMMARY_BASENAME}: {e}")),
        }
    }

    async fn abort(
        &self,
        category: CheckCategory,
        source: FetchError,
        writer: &OutputWriter,
        mut summary: ExportSummary,
        started: Instant,
    ) -> ExportError {
        self.fail(
            &mut summary,
            format!("Failed to export {category} checks: {source}"),
        );
        self.fail(&mut summary, format!("Export failed: {source}"));
        summary.set_duration(started.elapsed());
        self.save_summary(writer, &mut summary).await;

        ExportError::ListFailed {
            category,
            source,
            summary: Box::new(summary),
        }
    }

    fn warn(&self, summary: &mut ExportSummary, message: String) {
        self.sink.emit(&ExportEvent::Warning {
            message: message.clone(),
        });
        summary.add_warning(message);
    }

    fn fail(&self, summary: &mut ExportSummary, message: String) {
        self.sink.emit(&ExportEvent::Error {
            message: message.clone(),
        });
        summary.add_error(message);
    }
}
