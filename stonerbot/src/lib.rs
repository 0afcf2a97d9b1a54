//! # stonerbot
//!
//! Chat front end for the Leafly directory: text messages become strain searches, shared
//! locations become dispensary searches, `/start` and `/help` get the usage text.
//! Wires bot-core, handler-chain, bot-telegram and leafly-client together.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod messages;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use config::BotConfig;
pub use handlers::{LocationHandler, ReplySender, StrainSearchHandler, UsageHandler};
pub use runner::{build_handler_chain, run_bot};
