//! Callback actions: the closed set of screen transitions a button can request.

use std::fmt;
use std::str::FromStr;

use crate::currency::CurrencyCode;
use crate::error::HandlerError;

const SELECT_PREFIX: &str = "select:";

/// A parsed callback action. Serializes to the callback data string sent with each button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MainMenu,
    Rates,
    Convert,
    Favorites,
    About,
    /// `select:<CODE>`; the code is already validated against the catalog.
    Select(CurrencyCode),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::MainMenu => f.write_str("main_menu"),
            Action::Rates => f.write_str("rates"),
            Action::Convert => f.write_str("convert"),
            Action::Favorites => f.write_str("favorites"),
            Action::About => f.write_str("about"),
            Action::Select(code) => write!(f, "{}{}", SELECT_PREFIX, code),
        }
    }
}

impl FromStr for Action {
    type Err = HandlerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main_menu" => Ok(Action::MainMenu),
            "rates" => Ok(Action::Rates),
            "convert" => Ok(Action::Convert),
            "favorites" => Ok(Action::Favorites),
            "about" => Ok(Action::About),
            _ => match s.strip_prefix(SELECT_PREFIX) {
                Some(code) => code.parse().map(Action::Select),
                None => Err(HandlerError::InvalidAction(s.to_string())),
            },
        }
    }
}
