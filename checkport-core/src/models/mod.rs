//! Domain models for checkport.
//!
//! ## Submodules
//!
//! - [`check_type`] - The dual-shape `type` field ([`CheckTypeVariant`])
//! - [`uptime`] - Uptime checks and their list response
//! - [`transaction`] - Transaction checks, steps and argument values
//! - [`summary`] - Run summary and check categories
//! - [`uptimerobot`] - UptimeRobot import record

pub mod check_type;
mod de;
pub mod summary;
pub mod transaction;
pub mod uptime;
pub mod uptimerobot;

pub use check_type::CheckTypeVariant;
pub use summary::{CheckCategory, ExportSummary};
pub use transaction::{
    ArgMap, ArgValue, Step, TransactionCheck, TransactionChecksResponse, TransactionMetadata,
};
pub use uptime::{CheckCounts, CheckStatus, Tag, UptimeCheck, UptimeChecksResponse};
pub use uptimerobot::{MonitorType, UptimeRobotMonitor};
#[cfg(test)]
mod serde_tests;
