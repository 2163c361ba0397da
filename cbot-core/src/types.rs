//! Core types: user, chat, interaction, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// What arrived: a bot command (without the leading slash) or the data of a pressed button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionKind {
    Command(String),
    Callback(String),
}

/// One inbound event from the user, independent of the transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub user: User,
    /// Chat the reply goes to. `None` for callbacks whose message is no longer accessible.
    pub chat: Option<Chat>,
    /// Message carrying the keyboard (callbacks) or the command message itself.
    pub message_id: Option<String>,
    pub kind: InteractionKind,
    pub created_at: DateTime<Utc>,
}

impl Interaction {
    /// Short form of the payload for logs: `/start` or the callback data.
    pub fn describe(&self) -> String {
        match &self.kind {
            InteractionKind::Command(name) => format!("/{}", name),
            InteractionKind::Callback(data) => data.clone(),
        }
    }

    pub fn chat_id(&self) -> Option<i64> {
        self.chat.as_ref().map(|c| c.id)
    }
}

/// Handler result for the chain. `Reply(text)` carries the text of the delivered screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain; a screen with this text was delivered.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific update (command message, callback query) to core [`Interaction`].
pub trait ToCoreInteraction: Send + Sync {
    fn to_core(&self) -> Interaction;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _interaction: &Interaction) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the interaction. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _interaction: &Interaction) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _interaction: &Interaction,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
