//! reqwest implementation of [`RateFetcher`].

use async_trait::async_trait;
use cbot_core::CurrencyCode;
use tracing::{debug, instrument, warn};

use crate::{RateFetcher, RateSnapshot};

/// Public endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.exchangerate-api.com/v4/latest";

/// Client for `GET <endpoint>/<CODE>`. One request per fetch; no retry, no cache, transport default timeouts.
#[derive(Clone)]
pub struct ExchangeRateApiClient {
    endpoint: String,
    http: reqwest::Client,
}

impl ExchangeRateApiClient {
    /// Builds a client for `endpoint` (a trailing `/` is ignored).
    pub fn new(endpoint: &str) -> Self {
        Self::with_http_client(endpoint, reqwest::Client::new())
    }

    /// Builds a client that sends requests through an existing reqwest client.
    pub fn with_http_client(endpoint: &str, http: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request URL for `base`.
    pub fn url_for(&self, base: CurrencyCode) -> String {
        format!("{}/{}", self.endpoint, base)
    }
}

impl Default for ExchangeRateApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl RateFetcher for ExchangeRateApiClient {
    #[instrument(name = "ExchangeRateFetch", skip_all, fields(base = %base))]
    async fn fetch(&self, base: CurrencyCode) -> Option<RateSnapshot> {
        let url = self.url_for(base);
        debug!(url = %url, "Requesting exchange rates");

        let response = match self.http.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "Exchange rate request failed");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Exchange rate service returned an error status");
            return None;
        }

        match response.json::<RateSnapshot>().await {
            Ok(snapshot) => {
                debug!(rates = snapshot.len(), "Exchange rates received");
                Some(snapshot)
            }
            Err(e) => {
                warn!(error = %e, "Exchange rate response could not be parsed");
                None
            }
        }
    }
}
