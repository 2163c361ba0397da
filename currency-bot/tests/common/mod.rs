//! Shared test doubles: a recording [`MockBot`] and a canned [`StubFetcher`].

#![allow(dead_code)]

pub mod mock_bot;
pub mod stub_fetcher;

use cbot_core::{Chat, Interaction, InteractionKind, User};
use chrono::Utc;

pub const TEST_USER_ID: i64 = 123456;
pub const TEST_CHAT_ID: i64 = 654321;

fn test_user() -> User {
    User {
        id: TEST_USER_ID,
        username: Some("testuser".to_string()),
        first_name: Some("Test".to_string()),
        last_name: None,
    }
}

fn test_chat() -> Chat {
    Chat {
        id: TEST_CHAT_ID,
        chat_type: "private".to_string(),
    }
}

/// Callback press on the keyboard attached to message `message_id`.
pub fn callback(data: &str, message_id: &str) -> Interaction {
    Interaction {
        user: test_user(),
        chat: Some(test_chat()),
        message_id: Some(message_id.to_string()),
        kind: InteractionKind::Callback(data.to_string()),
        created_at: Utc::now(),
    }
}

/// Callback whose message is no longer accessible.
pub fn detached_callback(data: &str) -> Interaction {
    Interaction {
        chat: None,
        message_id: None,
        ..callback(data, "0")
    }
}

/// Bot command such as `start`.
pub fn command(name: &str) -> Interaction {
    Interaction {
        user: test_user(),
        chat: Some(test_chat()),
        message_id: Some("1".to_string()),
        kind: InteractionKind::Command(name.to_string()),
        created_at: Utc::now(),
    }
}
