//! Bot configuration: BaseConfig (Telegram + log) + RatesConfig (exchange-rate service).

mod base;
mod bot_config;
mod rates;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use rates::RatesConfig;
