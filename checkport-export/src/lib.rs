// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # checkport Export
//!
//! Coordinates an export run.
//!
//! This crate provides:
//!
//! - **Exporter**: Lists, filters, enriches and writes each check category
//! - **StatusFilter**: Which listed checks are exported
//! - **UptimeRobotConverter**: Uptime checks to UptimeRobot import rows
//! - **ExportSink**: Where progress events go ([`TracingSink`] by default)
//!
//! ## Usage
//!
//! ```ignore
//! use checkport_export::Exporter;
//! use checkport_fetch::{ClientSettings, PingdomClient};
//!
//! let client = PingdomClient::new(ClientSettings::from_config(&config))?;
//! let summary = Exporter::new(Arc::new(client), config).run().await?;
//! println!("{} checks exported", summary.total_checks_exported);
//! ```

pub mod error;
pub mod filter;
pub mod orchestrator;
pub mod sink;
pub mod uptimerobot;

pub use error::{ConvertError, ExportError};
pub use filter::StatusFilter;
pub use orchestrator::Exporter;
pub use sink::{ExportEvent, ExportSink, NullSink, TracingSink};
pub use uptimerobot::{
    Conversion, IMPORT_BASENAME, IMPORT_HEADER, MIN_INTERVAL_SECONDS, UptimeRobotConverter,
    render_import_csv,
};
