// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # checkport Fetch
//!
//! Read-only access to the Pingdom monitoring API.
//!
//! - [`api::ApiClient`] - The client contract the exporter depends on
//! - [`client::PingdomClient`] - reqwest implementation (Bearer auth,
//!   gzip/deflate, structured error decoding)
//! - [`throttle::RequestThrottle`] - Fixed delay before every request
//!
//! ## Example
//!
//! ```ignore
//! use checkport_fetch::{ApiClient, ClientSettings, PingdomClient};
//!
//! let client = PingdomClient::new(ClientSettings::new(base_url, token))?;
//! let listing = client.list_uptime_checks().await?;
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod settings;
pub mod throttle;

pub use api::ApiClient;
pub use client::{PingdomClient, TRANSACTION_LIST_LIMIT, UPTIME_LIST_LIMIT};
pub use error::{FetchError, PRODUCT_NAME, decode_error};
pub use settings::ClientSettings;
pub use throttle::RequestThrottle;
