//! Wraps teloxide::Bot and implements [`cbot_core::Bot`]. Production code sends screens via Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use cbot_core::{Bot as CoreBot, BotError, Chat, Result, Screen};
use teloxide::{
    prelude::*,
    types::{ChatId, MessageId},
    ApiError, RequestError,
};
use tracing::debug;

use super::keyboard::to_inline_keyboard;

/// Parses a message id string into an i32. Used by edit_screen.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| BotError::Bot(format!("Invalid message_id for edit: {}", s)))
}

/// Thin wrapper around teloxide::Bot that implements cbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_screen(&self, chat: &Chat, screen: &Screen) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), screen.text.clone())
            .reply_markup(to_inline_keyboard(&screen.layout))
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn edit_screen(&self, chat: &Chat, message_id: &str, screen: &Screen) -> Result<()> {
        let id = parse_message_id(message_id)?;
        let result = self
            .bot
            .edit_message_text(ChatId(chat.id), MessageId(id), screen.text.clone())
            .reply_markup(to_inline_keyboard(&screen.layout))
            .await;
        match result {
            Ok(_) => Ok(()),
            // Pressing the same button twice re-renders an identical screen.
            Err(RequestError::Api(ApiError::MessageNotModified)) => {
                debug!(chat_id = chat.id, message_id = id, "Screen unchanged, edit skipped");
                Ok(())
            }
            Err(e) => Err(BotError::Bot(e.to_string())),
        }
    }
}
