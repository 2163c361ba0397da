//! Bot abstraction for delivering screens.
//!
//! [`Bot`] is transport-agnostic; the teloxide implementation lives in the `currency-bot` crate.

use async_trait::async_trait;

use crate::error::Result;
use crate::layout::Screen;
use crate::types::Chat;

/// Delivers screens to a chat. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a screen as a new message.
    async fn send_screen(&self, chat: &Chat, screen: &Screen) -> Result<()>;
    /// Replaces the text and keyboard of an already-sent message. `message_id` is transport-specific (e.g. Telegram numeric string).
    async fn edit_screen(&self, chat: &Chat, message_id: &str, screen: &Screen) -> Result<()>;
}
