//! Logs each interaction in before() and the response in after(); always continues.

use async_trait::async_trait;
use cbot_core::{Handler, HandlerResponse, Interaction, Result};
use tracing::{debug, info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, interaction))]
    async fn before(&self, interaction: &Interaction) -> Result<bool> {
        info!(
            user_id = interaction.user.id,
            username = %interaction.user.username.as_deref().unwrap_or("unknown"),
            chat_id = ?interaction.chat_id(),
            payload = %interaction.describe(),
            "Received interaction"
        );
        Ok(true)
    }

    #[instrument(skip(self, interaction, response))]
    async fn after(&self, interaction: &Interaction, response: &HandlerResponse) -> Result<()> {
        debug!(
            user_id = interaction.user.id,
            message_id = ?interaction.message_id,
            response = ?response,
            "Processed interaction"
        );
        Ok(())
    }
}
