//! [`RateFetcher`] returning a fixed result and recording requested bases.

use async_trait::async_trait;
use cbot_core::CurrencyCode;
use exchange_client::{RateFetcher, RateSnapshot};
use std::sync::{Arc, Mutex};

pub struct StubFetcher {
    result: Option<RateSnapshot>,
    calls: Mutex<Vec<CurrencyCode>>,
}

impl StubFetcher {
    /// Fetcher that always returns `snapshot`.
    pub fn present(snapshot: RateSnapshot) -> Arc<Self> {
        Arc::new(Self {
            result: Some(snapshot),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Fetcher that always reports the service unavailable.
    pub fn absent() -> Arc<Self> {
        Arc::new(Self {
            result: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Bases requested so far, in order.
    pub fn calls(&self) -> Vec<CurrencyCode> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RateFetcher for StubFetcher {
    async fn fetch(&self, base: CurrencyCode) -> Option<RateSnapshot> {
        self.calls.lock().unwrap().push(base);
        self.result.clone()
    }
}

/// Snapshot with all ten catalog currencies relative to USD.
pub fn usd_snapshot() -> RateSnapshot {
    [
        ("EUR", 0.9123),
        ("GBP", 0.812),
        ("JPY", 151.4),
        ("AUD", 1.5),
        ("CAD", 1.35),
        ("CHF", 0.88),
        ("CNY", 7.2),
        ("SEK", 10.4),
        ("NZD", 1.6),
        ("USD", 1.0),
    ]
    .into_iter()
    .map(|(code, rate)| (code.to_string(), rate))
    .collect()
}
