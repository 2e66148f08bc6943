// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `checkport` Core
//!
//! Core types and models shared by all `checkport` crates.
//!
//! ## Key Types
//!
//! ### Checks
//! - [`UptimeCheck`] - Availability monitor (list and detail shapes)
//! - [`CheckTypeVariant`] - Resolved form of the dual-shape `type` field
//! - [`TransactionCheck`] - Scripted multi-step monitor
//! - [`Step`] / [`ArgValue`] - Transaction steps and their dynamic arguments
//!
//! ### Output
//! - [`ExportSummary`] - Per-run counts, warnings and errors
//! - [`UptimeRobotMonitor`] - Row of the UptimeRobot import file
//!
//! ### Configuration
//! - [`ExportConfig`] - Resolved run configuration
//! - [`ExportMode`] / [`OutputFormat`]

pub mod config;
pub mod error;
pub mod models;

pub use config::{DEFAULT_BASE_URL, ExportConfig, ExportMode, OutputFormat, PLACEHOLDER_TOKEN};
pub use error::CoreError;

pub use models::{
    // Checks
    ArgMap,
    ArgValue,
    CheckCounts,
    CheckStatus,
    CheckTypeVariant,
    Step,
    Tag,
    TransactionCheck,
    TransactionChecksResponse,
    TransactionMetadata,
    UptimeCheck,
    UptimeChecksResponse,
    // Run output
    CheckCategory,
    ExportSummary,
    MonitorType,
    UptimeRobotMonitor,
};
