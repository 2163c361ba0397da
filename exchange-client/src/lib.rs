//! # Exchange-rate client
//!
//! [`RateFetcher`] is the seam the bot depends on; [`ExchangeRateApiClient`] implements it against
//! an exchangerate-api.com style endpoint (`GET <endpoint>/<CODE>` returning `{"rates": {...}}`).
//! Every failure (transport, status, body) collapses into `None`.

mod client;
mod snapshot;

pub use client::{ExchangeRateApiClient, DEFAULT_ENDPOINT};
pub use snapshot::RateSnapshot;

use async_trait::async_trait;
use cbot_core::CurrencyCode;

/// Source of exchange rates for a base currency.
#[async_trait]
pub trait RateFetcher: Send + Sync {
    /// Latest rates relative to `base`, or `None` if the service could not be used.
    async fn fetch(&self, base: CurrencyCode) -> Option<RateSnapshot>;
}
