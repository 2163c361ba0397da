//! Exchange-rate service config.

use anyhow::Result;
use exchange_client::DEFAULT_ENDPOINT;
use std::env;

#[derive(Debug, Clone)]
pub struct RatesConfig {
    /// EXCHANGE_API_URL; the base code is appended as the last path segment.
    pub exchange_api_url: String,
}

impl RatesConfig {
    pub fn from_env() -> Self {
        let exchange_api_url =
            env::var("EXCHANGE_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self { exchange_api_url }
    }

    pub fn validate(&self) -> Result<()> {
        match reqwest::Url::parse(&self.exchange_api_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(()),
            _ => anyhow::bail!(
                "EXCHANGE_API_URL must be an http(s) URL: {}",
                self.exchange_api_url
            ),
        }
    }
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            exchange_api_url: DEFAULT_ENDPOINT.to_string(),
        }
    }
}
