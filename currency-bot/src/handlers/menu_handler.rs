//! Menu handler: turns an interaction into a screen through [`DispatchRouter`] and delivers it.
//!
//! `/start` sends a new message; a callback edits the message that carries the pressed keyboard.

use std::sync::Arc;

use async_trait::async_trait;
use cbot_core::{Bot, Handler, HandlerError, HandlerResponse, Interaction, InteractionKind, Result};
use tracing::{debug, info, instrument, warn};

use crate::router::DispatchRouter;

/// Command that opens the main menu.
pub const START_COMMAND: &str = "start";

pub struct MenuHandler {
    router: DispatchRouter,
    bot: Arc<dyn Bot>,
}

impl MenuHandler {
    pub fn new(router: DispatchRouter, bot: Arc<dyn Bot>) -> Self {
        Self { router, bot }
    }

    async fn on_command(&self, interaction: &Interaction, name: &str) -> Result<HandlerResponse> {
        if name != START_COMMAND {
            debug!(command = %name, "Unhandled command");
            return Ok(HandlerResponse::Ignore);
        }
        let chat = interaction.chat.as_ref().ok_or(HandlerError::NoMessage)?;
        let screen = self.router.start();
        self.bot.send_screen(chat, &screen).await?;
        info!(chat_id = chat.id, "Sent main menu");
        Ok(HandlerResponse::Reply(screen.text))
    }

    async fn on_callback(&self, interaction: &Interaction, data: &str) -> Result<HandlerResponse> {
        let screen = match self.router.handle(data).await {
            Some(screen) => screen,
            None => return Ok(HandlerResponse::Ignore),
        };

        let (chat, message_id) = match (&interaction.chat, &interaction.message_id) {
            (Some(chat), Some(message_id)) => (chat, message_id),
            _ => {
                warn!(
                    user_id = interaction.user.id,
                    action = %data,
                    "Callback message is not accessible, cannot edit"
                );
                return Err(HandlerError::NoMessage.into());
            }
        };

        self.bot.edit_screen(chat, message_id, &screen).await?;
        info!(chat_id = chat.id, message_id = %message_id, action = %data, "Screen updated");
        Ok(HandlerResponse::Reply(screen.text))
    }
}

#[async_trait]
impl Handler for MenuHandler {
    #[instrument(skip(self, interaction), fields(user_id = interaction.user.id))]
    async fn handle(&self, interaction: &Interaction) -> Result<HandlerResponse> {
        match &interaction.kind {
            InteractionKind::Command(name) => self.on_command(interaction, name).await,
            InteractionKind::Callback(data) => self.on_callback(interaction, data).await,
        }
    }
}
