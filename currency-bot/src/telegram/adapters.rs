//! Adapters from Telegram (teloxide) types to cbot_core types.

use cbot_core::{Chat, Interaction, InteractionKind, ToCoreInteraction, ToCoreUser, User};
use teloxide::types::{CallbackQuery, MaybeInaccessibleMessage};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn unknown_user() -> User {
    User {
        id: 0,
        username: None,
        first_name: None,
        last_name: None,
    }
}

fn core_chat(chat: &teloxide::types::Chat) -> Chat {
    Chat {
        id: chat.id.0,
        chat_type: format!("{:?}", chat.kind),
    }
}

/// Command name of a message text: `"/start@my_bot extra"` → `"start"`. `None` if not a command.
pub fn command_name(text: &str) -> Option<String> {
    let first = text.split_whitespace().next()?;
    let name = first.strip_prefix('/')?;
    let name = name.split('@').next().unwrap_or(name);
    if name.is_empty() {
        None
    } else {
        Some(name.to_lowercase())
    }
}

/// Wraps a teloxide command Message for conversion to core [`Interaction`].
pub struct TelegramCommandWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreInteraction for TelegramCommandWrapper<'a> {
    fn to_core(&self) -> Interaction {
        let msg = self.0;
        Interaction {
            user: msg
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(unknown_user),
            chat: Some(core_chat(&msg.chat)),
            message_id: Some(msg.id.to_string()),
            kind: InteractionKind::Command(msg.text().and_then(command_name).unwrap_or_default()),
            created_at: chrono::Utc::now(),
        }
    }
}

/// Wraps a teloxide CallbackQuery for conversion to core [`Interaction`].
/// Chat and message id are taken from the message carrying the keyboard, when still accessible.
pub struct TelegramCallbackWrapper<'a>(pub &'a CallbackQuery);

impl<'a> ToCoreInteraction for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Interaction {
        let q = self.0;
        let (chat, message_id) = match &q.message {
            Some(MaybeInaccessibleMessage::Regular(msg)) => {
                (Some(core_chat(&msg.chat)), Some(msg.id.to_string()))
            }
            _ => (None, None),
        };
        Interaction {
            user: TelegramUserWrapper(&q.from).to_core(),
            chat,
            message_id,
            kind: InteractionKind::Callback(q.data.clone().unwrap_or_default()),
            created_at: chrono::Utc::now(),
        }
    }
}
