//! Integration tests for the handler chain built by [`currency_bot::build_handler_chain`].
//!
//! Drives the chain with core interactions and a [`MockBot`] that records deliveries:
//! `/start` sends a new screen, callbacks edit the keyboard's message, no-op actions deliver nothing.

mod common;

use cbot_core::{BotError, HandlerError, HandlerResponse};
use common::mock_bot::{Delivery, MockBot};
use common::stub_fetcher::{usd_snapshot, StubFetcher};
use common::{callback, command, detached_callback, TEST_CHAT_ID};
use currency_bot::router::{MAIN_MENU_TEXT, RATES_ERROR_TEXT, WELCOME_TEXT};
use currency_bot::{build_handler_chain, currency_picker, main_menu, DispatchRouter};

#[tokio::test]
async fn test_start_command_sends_welcome() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = build_handler_chain(DispatchRouter::new(StubFetcher::absent()), bot);

    let response = chain.handle(&command("start")).await.unwrap();

    assert_eq!(response, HandlerResponse::Reply(WELCOME_TEXT.to_string()));
    match rx.try_recv().unwrap() {
        Delivery::Sent { chat_id, screen } => {
            assert_eq!(chat_id, TEST_CHAT_ID);
            assert_eq!(screen.text, WELCOME_TEXT);
            assert_eq!(screen.layout, main_menu());
        }
        other => panic!("expected a new message, got {:?}", other),
    }
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_other_command_is_ignored() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = build_handler_chain(DispatchRouter::new(StubFetcher::absent()), bot);

    let response = chain.handle(&command("help")).await.unwrap();

    assert_eq!(response, HandlerResponse::Continue);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_callback_edits_keyboard_message() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = build_handler_chain(DispatchRouter::new(StubFetcher::absent()), bot);

    let response = chain.handle(&callback("convert", "42")).await.unwrap();

    assert!(matches!(response, HandlerResponse::Reply(_)));
    match rx.try_recv().unwrap() {
        Delivery::Edited {
            chat_id,
            message_id,
            screen,
        } => {
            assert_eq!(chat_id, TEST_CHAT_ID);
            assert_eq!(message_id, "42");
            assert_eq!(screen.layout, currency_picker());
        }
        other => panic!("expected an edit, got {:?}", other),
    }
}

#[tokio::test]
async fn test_rates_flow_then_back_to_menu() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = build_handler_chain(DispatchRouter::new(StubFetcher::present(usd_snapshot())), bot);

    chain.handle(&callback("rates", "7")).await.unwrap();
    chain.handle(&callback("main_menu", "7")).await.unwrap();

    let first = rx.try_recv().unwrap();
    let second = rx.try_recv().unwrap();
    match (first, second) {
        (Delivery::Edited { screen: rates, .. }, Delivery::Edited { screen: menu, .. }) => {
            assert!(rates.text.contains("JPY: 151.40"));
            assert_eq!(menu.text, MAIN_MENU_TEXT);
        }
        other => panic!("expected two edits, got {:?}", other),
    }
}

#[tokio::test]
async fn test_rates_unavailable_still_edits_with_error() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = build_handler_chain(DispatchRouter::new(StubFetcher::absent()), bot);

    let response = chain.handle(&callback("rates", "7")).await.unwrap();

    assert_eq!(response, HandlerResponse::Reply(RATES_ERROR_TEXT.to_string()));
    assert!(matches!(rx.try_recv().unwrap(), Delivery::Edited { .. }));
}

/// **Test: a failed selection delivers nothing (the screen stays as it was).**
#[tokio::test]
async fn test_select_unavailable_delivers_nothing() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = build_handler_chain(DispatchRouter::new(StubFetcher::absent()), bot);

    let response = chain.handle(&callback("select:EUR", "7")).await.unwrap();

    assert_eq!(response, HandlerResponse::Continue);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_unknown_and_favorites_deliver_nothing() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = build_handler_chain(DispatchRouter::new(StubFetcher::present(usd_snapshot())), bot);

    for data in ["unknown_action", "favorites"] {
        let response = chain.handle(&callback(data, "7")).await.unwrap();
        assert_eq!(response, HandlerResponse::Continue);
    }
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_detached_callback_with_screen_is_an_error() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = build_handler_chain(DispatchRouter::new(StubFetcher::absent()), bot);

    let err = chain.handle(&detached_callback("about")).await.unwrap_err();

    assert!(matches!(err, BotError::Handler(HandlerError::NoMessage)));
    assert!(rx.try_recv().is_err());
}
