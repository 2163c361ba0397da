//! # Currency bot
//!
//! Telegram front-end for exchange rates: a two-level inline-keyboard menu whose buttons are
//! routed by [`DispatchRouter`] to screens built from [`menu`] layouts and live rates fetched
//! through [`exchange_client`]. Wires cbot-core, handler-chain and teloxide; loads config from env.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod menu;
pub mod router;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};
pub use config::{BaseConfig, BotConfig, RatesConfig};
pub use handlers::{LoggingHandler, MenuHandler};
pub use menu::{currency_picker, main_menu};
pub use router::{format_rate_table, DispatchRouter};
pub use runner::{build_handler_chain, build_teloxide_bot, run_bot};
