//! Pingdom API client.

use async_trait::async_trait;
use checkport_core::{
    TransactionCheck, TransactionChecksResponse, UptimeCheck, UptimeChecksResponse,
};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, info, instrument};
use url::Url;

use crate::api::ApiClient;
use crate::error::{FetchError, decode_error};
use crate::settings::ClientSettings;
use crate::throttle::RequestThrottle;

// ============================================================================
// Constants
// ============================================================================

/// User agent string for checkport.
const USER_AGENT: &str = concat!("checkport/", env!("CARGO_PKG_VERSION"));

/// Largest page the uptime list endpoint accepts.
pub const UPTIME_LIST_LIMIT: u32 = 25_000;

/// Largest page the transaction list endpoint accepts.
pub const TRANSACTION_LIST_LIMIT: u32 = 1_000;

const UPTIME_ENDPOINT: &str = "checks";
const TRANSACTION_ENDPOINT: &str = "tms/check";

// ============================================================================
// Client
// ============================================================================

/// Authenticated, throttled client for the Pingdom REST API.
///
/// List calls request one maximum-size page and never paginate.
#[derive(Debug, Clone)]
pub struct PingdomClient {
    http: Client,
    base: Url,
    settings: ClientSettings,
    throttle: RequestThrottle,
}

impl PingdomClient {
    /// Creates a client from settings.
    pub fn new(settings: ClientSettings) -> Result<Self, FetchError> {
        let base = normalize_base(&settings.base_url)?;
        let http = Client::builder()
            .timeout(settings.timeout)
            .user_agent(USER_AGENT)
            .default_headers(default_headers(&settings.api_token)?)
            .gzip(true)
            .deflate(true)
            .build()?;

        Ok(Self {
            http,
            base,
            throttle: RequestThrottle::from_millis(settings.request_delay_ms),
            settings,
        })
    }

    /// Returns the normalized base URL.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Builds the uptime list URL.
    pub fn uptime_list_url(&self) -> Result<Url, FetchError> {
        let limit = UPTIME_LIST_LIMIT.to_string();
        let mut query = vec![("limit", limit.as_str())];
        if self.settings.include_tags {
            query.push(("include_tags", "true"));
        }
        self.endpoint(UPTIME_ENDPOINT, &query)
    }

    /// Builds the transaction list URL.
    pub fn transaction_list_url(&self) -> Result<Url, FetchError> {
        let limit = TRANSACTION_LIST_LIMIT.to_string();
        let mut query = vec![("limit", limit.as_str())];
        if self.settings.include_tags {
            query.push(("extended_tags", "true"));
        }
        self.endpoint(TRANSACTION_ENDPOINT, &query)
    }

    /// Builds the uptime detail URL.
    pub fn uptime_detail_url(&self, id: i64) -> Result<Url, FetchError> {
        let mut query = Vec::new();
        if self.settings.include_teams {
            query.push(("include_teams", "true"));
        }
        self.endpoint(&format!("{UPTIME_ENDPOINT}/{id}"), &query)
    }

    /// Builds the transaction detail URL.
    pub fn transaction_detail_url(&self, id: i64) -> Result<Url, FetchError> {
        let mut query = Vec::new();
        if self.settings.include_tags {
            query.push(("extended_tags", "true"));
        }
        self.endpoint(&format!("{TRANSACTION_ENDPOINT}/{id}"), &query)
    }

    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, FetchError> {
        let mut url = self
            .base
            .join(path)
            .map_err(|e| FetchError::InvalidUrl(format!("{path}: {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Throttles, performs a GET and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        self.throttle.wait().await;
        debug!(url = %url, "GET request");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = %status, bytes = body.len(), "Response received");

        if !status.is_success() {
            return Err(decode_error(status, &body));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ApiClient for PingdomClient {
    #[instrument(skip(self))]
    async fn list_uptime_checks(&self) -> Result<UptimeChecksResponse, FetchError> {
        info!("Fetching uptime checks");
        let response: UptimeChecksResponse = self.get_json(self.uptime_list_url()?).await?;
        info!(count = response.checks.len(), "Fetched uptime checks");
        Ok(response)
    }

    #[instrument(skip(self))]
    async fn list_transaction_checks(&self) -> Result<TransactionChecksResponse, FetchError> {
        info!("Fetching transaction checks");
        let response: TransactionChecksResponse =
            self.get_json(self.transaction_list_url()?).await?;
        info!(count = response.checks.len(), "Fetched transaction checks");
        Ok(response)
    }

    #[instrument(skip(self))]
    async fn get_uptime_check_detail(&self, id: i64) -> Result<UptimeCheck, FetchError> {
        debug!("Fetching uptime check details");
        let envelope: Map<String, Value> = self.get_json(self.uptime_detail_url(id)?).await?;
        unwrap_uptime_detail(envelope)
    }

    #[instrument(skip(self))]
    async fn get_transaction_check_detail(
        &self,
        id: i64,
    ) -> Result<TransactionCheck, FetchError> {
        debug!("Fetching transaction check details");
        self.get_json(self.transaction_detail_url(id)?).await
    }

    async fn throttle(&self) {
        self.throttle.wait().await;
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Parses the base URL and makes sure endpoints join below its path.
fn normalize_base(raw: &str) -> Result<Url, FetchError> {
    let mut base = Url::parse(raw.trim()).map_err(|e| FetchError::InvalidUrl(format!("{raw}: {e}")))?;
    if base.cannot_be_a_base() {
        return Err(FetchError::InvalidUrl(format!("{raw}: not a base URL")));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.set_query(None);
    Ok(base)
}

/// Bearer auth plus JSON accept.
fn default_headers(token: &str) -> Result<HeaderMap, FetchError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|e| FetchError::InvalidHeader(format!("API token: {e}")))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    Ok(headers)
}

/// Unwraps the `check` key of an uptime detail response.
///
/// A response without the key (or with `null`) yields a zero-value check.
pub fn unwrap_uptime_detail(mut envelope: Map<String, Value>) -> Result<UptimeCheck, FetchError> {
    match envelope.remove("check") {
        None | Some(Value::Null) => Ok(UptimeCheck::default()),
        Some(check) => Ok(serde_json::from_value(check)?),
    }
}

// ============================================================================
// Tests
// ============================================================================
