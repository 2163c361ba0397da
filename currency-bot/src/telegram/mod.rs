//! Telegram transport: adapters from teloxide types, the [`cbot_core::Bot`] implementation,
//! keyboard conversion, and the update dispatcher.

mod adapters;
mod bot_adapter;
mod keyboard;
mod runner;

pub use adapters::{
    command_name, TelegramCallbackWrapper, TelegramCommandWrapper, TelegramUserWrapper,
};
pub use bot_adapter::{parse_message_id, TelegramBotAdapter};
pub use keyboard::to_inline_keyboard;
pub use runner::{run_dispatcher, schema, Command};
