//! # bot-core
//!
//! Core types and traits for the chat bot: [`Bot`], [`Handler`], message, user and location types,
//! and tracing initialization. Transport-agnostic; used by bot-telegram, handler-chain and stonerbot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use logger::{init_tracing, open_log_file};
pub use types::{Chat, Handler, HandlerResponse, Location, Message, ToCoreMessage, ToCoreUser, User};
