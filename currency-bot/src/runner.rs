//! Application wiring: config → tracing → rate client → router → handler chain → dispatcher.

use std::sync::Arc;

use anyhow::Result;
use cbot_core::{init_tracing, mask_token, Bot as CoreBot};
use exchange_client::{ExchangeRateApiClient, RateFetcher};
use handler_chain::HandlerChain;
use teloxide::Bot;
use tracing::{error, info, instrument};

use crate::config::BotConfig;
use crate::handlers::{LoggingHandler, MenuHandler};
use crate::router::DispatchRouter;
use crate::telegram::{run_dispatcher, TelegramBotAdapter};

/// Builds the teloxide Bot, pointing it at TELEGRAM_API_URL when configured.
pub fn build_teloxide_bot(config: &BotConfig) -> Bot {
    let bot = Bot::new(config.bot_token());
    match config.telegram_api_url() {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Chain used for every interaction: logging first, then the menu handler.
pub fn build_handler_chain(router: DispatchRouter, bot: Arc<dyn CoreBot>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(MenuHandler::new(router, bot)))
}

/// Main entry: validate config, init logging, build components, then dispatch updates until Ctrl-C.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        bot_token = %mask_token(config.bot_token()),
        exchange_api_url = %config.exchange_api_url(),
        telegram_api_url = ?config.telegram_api_url(),
        log_file = %config.log_file(),
        "Initializing bot"
    );

    let fetcher: Arc<dyn RateFetcher> =
        Arc::new(ExchangeRateApiClient::new(config.exchange_api_url()));
    let router = DispatchRouter::new(fetcher);

    let teloxide_bot = build_teloxide_bot(&config);
    let bot_adapter: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let handler_chain = build_handler_chain(router, bot_adapter);

    info!("Bot is running");

    run_dispatcher(teloxide_bot, handler_chain).await
}
