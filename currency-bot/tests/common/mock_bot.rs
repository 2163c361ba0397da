//! Mock implementation of [`cbot_core::Bot`] for integration tests.
//!
//! Records `send_screen` and `edit_screen` calls so tests can assert on what the user would see
//! without hitting Telegram.

use async_trait::async_trait;
use cbot_core::{Bot, Chat, Result, Screen};
use std::sync::Arc;
use tokio::sync::mpsc;

/// One recorded delivery.
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    Sent {
        chat_id: i64,
        screen: Screen,
    },
    Edited {
        chat_id: i64,
        message_id: String,
        screen: Screen,
    },
}

/// Mock Bot that forwards every delivery to a channel held by the test.
pub struct MockBot {
    tx: mpsc::UnboundedSender<Delivery>,
}

impl MockBot {
    /// Creates a MockBot and returns the receiver for delivery records.
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<Delivery>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { tx }), rx)
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_screen(&self, chat: &Chat, screen: &Screen) -> Result<()> {
        let _ = self.tx.send(Delivery::Sent {
            chat_id: chat.id,
            screen: screen.clone(),
        });
        Ok(())
    }

    async fn edit_screen(&self, chat: &Chat, message_id: &str, screen: &Screen) -> Result<()> {
        let _ = self.tx.send(Delivery::Edited {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            screen: screen.clone(),
        });
        Ok(())
    }
}
