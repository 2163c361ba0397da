//! Rates returned by one fetch.

use std::collections::HashMap;

use cbot_core::CurrencyCode;
use serde::Deserialize;

/// Currency code → rate for one fetch. Keys are whatever codes the service returned.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RateSnapshot {
    rates: HashMap<String, f64>,
}

impl RateSnapshot {
    pub fn new(rates: HashMap<String, f64>) -> Self {
        Self { rates }
    }

    /// Rate for a catalog currency, if the service reported it.
    pub fn get(&self, code: CurrencyCode) -> Option<f64> {
        self.rates.get(code.code()).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl FromIterator<(String, f64)> for RateSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
