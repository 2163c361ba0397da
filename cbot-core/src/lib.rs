//! # cbot-core
//!
//! Core types and traits for the currency bot: the fixed [`CurrencyCode`] catalog, [`Action`],
//! [`MenuLayout`] and [`Screen`], the [`Bot`] and [`Handler`] traits, interaction types, and
//! tracing initialization. Transport-agnostic; used by handler-chain and currency-bot.

pub mod action;
pub mod bot;
pub mod currency;
pub mod error;
pub mod layout;
pub mod logger;
pub mod types;

pub use action::Action;
pub use bot::Bot;
pub use currency::{catalog, CurrencyCode};
pub use error::{BotError, HandlerError, Result};
pub use layout::{Button, MenuLayout, Screen};
pub use logger::{init_tracing, mask_token};
pub use types::{
    Chat, Handler, HandlerResponse, Interaction, InteractionKind, ToCoreInteraction, ToCoreUser,
    User,
};
