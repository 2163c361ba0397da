//! Update dispatcher: `/start` messages and callback queries are converted to core
//! [`Interaction`](cbot_core::Interaction)s and passed to the HandlerChain.

use anyhow::Result;
use cbot_core::ToCoreInteraction;
use handler_chain::HandlerChain;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, Message};
use teloxide::utils::command::BotCommands;
use tracing::{error, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramCommandWrapper};

type DispatchError = Box<dyn std::error::Error + Send + Sync + 'static>;
type HandlerResult = std::result::Result<(), DispatchError>;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    #[command(description = "open the main menu")]
    Start,
}

/// Routing tree: known commands from messages, then every callback query.
pub fn schema() -> UpdateHandler<DispatchError> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(on_command),
        )
        .branch(Update::filter_callback_query().endpoint(on_callback))
}

async fn on_command(msg: Message, chain: HandlerChain) -> HandlerResult {
    let interaction = TelegramCommandWrapper(&msg).to_core();
    info!(
        user_id = interaction.user.id,
        chat_id = msg.chat.id.0,
        command = %interaction.describe(),
        "Received command"
    );
    if let Err(e) = chain.handle(&interaction).await {
        error!(error = %e, user_id = interaction.user.id, "Handler chain failed");
    }
    Ok(())
}

async fn on_callback(bot: Bot, q: CallbackQuery, chain: HandlerChain) -> HandlerResult {
    // Acknowledge first so the client stops its loading indicator even when no screen follows.
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        warn!(error = %e, "Failed to answer callback query");
    }

    let interaction = TelegramCallbackWrapper(&q).to_core();
    if let Err(e) = chain.handle(&interaction).await {
        error!(
            error = %e,
            user_id = interaction.user.id,
            action = %interaction.describe(),
            "Handler chain failed"
        );
    }
    Ok(())
}

/// Registers the command list, then dispatches updates until Ctrl-C.
/// Updates from different chats are processed concurrently.
#[instrument(skip(bot, handler_chain))]
pub async fn run_dispatcher(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    info!(handlers = handler_chain.len(), "Dispatcher starting");

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![handler_chain])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("/start", "currency_bot").unwrap(), Command::Start);
        assert_eq!(
            Command::parse("/start@currency_bot", "currency_bot").unwrap(),
            Command::Start
        );
        assert!(Command::parse("/rates", "currency_bot").is_err());
    }

    #[test]
    fn test_command_descriptions_list_start() {
        let text = Command::descriptions().to_string();
        assert!(text.contains("/start"));
    }
}
