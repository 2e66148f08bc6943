// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # checkport Store
//!
//! Everything that touches the local filesystem.
//!
//! This crate provides:
//!
//! - **Serializers**: Pretty JSON and flat CSV rendering of any serializable value
//! - **OutputWriter**: Timestamped export files in the output directory
//! - **ConfigLayer**: File and environment configuration layers
//! - **Persistence**: Atomic text writes and directory creation
//!
//! ## Usage
//!
//! ```ignore
//! use checkport_store::{ConfigLayer, OutputWriter};
//!
//! let file = ConfigLayer::load_default().await?;
//! let env = ConfigLayer::from_env(std::env::vars())?;
//! let config = file.merge(env).resolve()?;
//!
//! let writer = OutputWriter::new(&config.output_directory, config.output_format, Utc::now());
//! writer.prepare().await?;
//! let files = writer.write("uptime-checks-summary", &checks).await?;
//! ```

pub mod config;
pub mod error;
pub mod persistence;
pub mod serializers;
pub mod writer;

pub use config::{ConfigLayer, DEFAULT_CONFIG_FILE, ENV_PREFIX};
pub use error::StoreError;
pub use persistence::{ensure_dir, read_text, write_text};
pub use serializers::{flatten_tree, quote_field, to_csv, to_pretty_json};
pub use writer::{OutputWriter, SUMMARY_BASENAME, TIMESTAMP_FORMAT};
