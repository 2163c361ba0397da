//! Fixed currency catalog.
//!
//! The catalog is a closed, ordered table of ten codes. It is a `const` and only read through
//! [`catalog`] and the accessors on [`CurrencyCode`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HandlerError;

/// One of the ten supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyCode {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Aud,
    Cad,
    Chf,
    Cny,
    Sek,
    Nzd,
}

/// Catalog in definition order. Menus and rate tables iterate this order.
const CATALOG: [CurrencyCode; 10] = [
    CurrencyCode::Usd,
    CurrencyCode::Eur,
    CurrencyCode::Gbp,
    CurrencyCode::Jpy,
    CurrencyCode::Aud,
    CurrencyCode::Cad,
    CurrencyCode::Chf,
    CurrencyCode::Cny,
    CurrencyCode::Sek,
    CurrencyCode::Nzd,
];

/// Returns the whole catalog in definition order.
pub fn catalog() -> &'static [CurrencyCode] {
    &CATALOG
}

impl CurrencyCode {
    /// Three-letter code, e.g. `"USD"`.
    pub fn code(self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Jpy => "JPY",
            CurrencyCode::Aud => "AUD",
            CurrencyCode::Cad => "CAD",
            CurrencyCode::Chf => "CHF",
            CurrencyCode::Cny => "CNY",
            CurrencyCode::Sek => "SEK",
            CurrencyCode::Nzd => "NZD",
        }
    }

    /// Display label: flag emoji and name.
    pub fn label(self) -> &'static str {
        match self {
            CurrencyCode::Usd => "🇺🇸 Dollar",
            CurrencyCode::Eur => "🇪🇺 Euro",
            CurrencyCode::Gbp => "🇬🇧 Pound",
            CurrencyCode::Jpy => "🇯🇵 Yen",
            CurrencyCode::Aud => "🇦🇺 AUD",
            CurrencyCode::Cad => "🇨🇦 CAD",
            CurrencyCode::Chf => "🇨🇭 CHF",
            CurrencyCode::Cny => "🇨🇳 Yuan",
            CurrencyCode::Sek => "🇸🇪 Krona",
            CurrencyCode::Nzd => "🇳🇿 NZD",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = HandlerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATALOG
            .iter()
            .copied()
            .find(|c| c.code() == s)
            .ok_or_else(|| HandlerError::InvalidAction(format!("unknown currency: {}", s)))
    }
}
