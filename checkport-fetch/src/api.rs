//! The API client contract consumed by the exporter.

use async_trait::async_trait;
use checkport_core::{
    TransactionCheck, TransactionChecksResponse, UptimeCheck, UptimeChecksResponse,
};

use crate::error::FetchError;

/// Read-only access to the monitoring API.
///
/// Every call waits out the configured inter-request delay before it hits
/// the network. The delay is also exposed as [`ApiClient::throttle`] so
/// callers can pace work of their own without knowing the concrete client.
///
/// ## Implementing a Client
///
/// ```ignore
/// struct FixtureClient { checks: Vec<UptimeCheck> }
///
/// #[async_trait]
/// impl ApiClient for FixtureClient {
///     async fn list_uptime_checks(&self) -> Result<UptimeChecksResponse, FetchError> {
///         Ok(UptimeChecksResponse { checks: self.checks.clone(), counts: None })
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Lists uptime checks (single maximum-size page).
    async fn list_uptime_checks(&self) -> Result<UptimeChecksResponse, FetchError>;

    /// Lists transaction checks (single maximum-size page).
    async fn list_transaction_checks(&self) -> Result<TransactionChecksResponse, FetchError>;

    /// Fetches one uptime check with its detailed `type` object.
    async fn get_uptime_check_detail(&self, id: i64) -> Result<UptimeCheck, FetchError>;

    /// Fetches one transaction check with its steps.
    async fn get_transaction_check_detail(&self, id: i64)
        -> Result<TransactionCheck, FetchError>;

    /// Waits out the inter-request delay.
    ///
    /// The default implementation does not wait.
    async fn throttle(&self) {}
}
