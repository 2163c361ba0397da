//! Dispatch from a callback action to the next screen.
//!
//! Every transition renders a whole screen and returns to the same waiting state; nothing is
//! remembered between calls. `None` means no response: the user's screen stays as it was.

use std::fmt::Write as _;
use std::sync::Arc;

use cbot_core::{catalog, Action, CurrencyCode, Screen};
use exchange_client::{RateFetcher, RateSnapshot};
use tracing::{debug, info, instrument, warn};

use crate::menu::{currency_picker, main_menu};

pub const WELCOME_TEXT: &str = "Welcome to Currency Bot!\nChoose what you want to do:";
pub const MAIN_MENU_TEXT: &str = "Choose what you want to do:";
pub const CONVERT_TEXT: &str = "Select base currency:";
pub const RATES_ERROR_TEXT: &str = "Error fetching rates";
pub const ABOUT_TEXT: &str =
    "Currency Bot v1.0\nPowered by exchangerate-api.com\n\nFast & Reliable currency conversion";

/// Base currency of the `rates` screen.
const RATES_BASE: CurrencyCode = CurrencyCode::Usd;

/// Only this many leading catalog entries are shown in a rate table.
const TABLE_SIZE: usize = 5;

/// Routes actions to screens, fetching rates where a screen needs them.
#[derive(Clone)]
pub struct DispatchRouter {
    fetcher: Arc<dyn RateFetcher>,
}

impl DispatchRouter {
    pub fn new(fetcher: Arc<dyn RateFetcher>) -> Self {
        Self { fetcher }
    }

    /// Screen for the `/start` command.
    pub fn start(&self) -> Screen {
        Screen::new(WELCOME_TEXT, main_menu())
    }

    /// Parses raw callback data and dispatches it. Unrecognized data yields `None`.
    pub async fn handle(&self, action_id: &str) -> Option<Screen> {
        match action_id.parse::<Action>() {
            Ok(action) => self.dispatch(action).await,
            Err(e) => {
                debug!(action_id = %action_id, error = %e, "Ignoring unrecognized action");
                None
            }
        }
    }

    #[instrument(skip_all, fields(action = %action))]
    pub async fn dispatch(&self, action: Action) -> Option<Screen> {
        match action {
            Action::MainMenu => Some(Screen::new(MAIN_MENU_TEXT, main_menu())),
            Action::Rates => {
                let text = match self.fetcher.fetch(RATES_BASE).await {
                    Some(snapshot) => format_rate_table(
                        &format!("💱 Current Rates (base {}):", RATES_BASE),
                        &snapshot,
                    ),
                    None => {
                        warn!(base = %RATES_BASE, "Rates unavailable, showing error screen");
                        RATES_ERROR_TEXT.to_string()
                    }
                };
                Some(Screen::new(text, main_menu()))
            }
            Action::Convert => Some(Screen::new(CONVERT_TEXT, currency_picker())),
            Action::Select(base) => match self.fetcher.fetch(base).await {
                Some(snapshot) => Some(Screen::new(
                    format_rate_table(&format!("1 {} = ", base), &snapshot),
                    main_menu(),
                )),
                None => {
                    // Unlike `rates`, a failed selection leaves the screen untouched.
                    info!(base = %base, "Rates unavailable for selection, screen left unchanged");
                    None
                }
            },
            Action::About => Some(Screen::new(ABOUT_TEXT, main_menu())),
            Action::Favorites => {
                debug!("Favorites has no screen");
                None
            }
        }
    }
}

/// `header`, a blank line, then `CODE: rate` (two decimals) for each of the first
/// [`TABLE_SIZE`] catalog codes present in `snapshot`, in catalog order.
pub fn format_rate_table(header: &str, snapshot: &RateSnapshot) -> String {
    let mut text = format!("{}\n\n", header);
    for code in catalog().iter().take(TABLE_SIZE) {
        if let Some(rate) = snapshot.get(*code) {
            let _ = writeln!(text, "{}: {:.2}", code, rate);
        }
    }
    text
}
