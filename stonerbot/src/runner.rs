use anyhow::Result;
use bot_core::{init_tracing, Bot};
use bot_telegram::{build_teloxide_bot, run_repl, TelegramBotAdapter};
use handler_chain::HandlerChain;
use leafly_client::{Directory, LeaflyClient};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::config::BotConfig;
use crate::handlers::{LocationHandler, ReplySender, StrainSearchHandler, UsageHandler};

/// Builds the dispatch chain: location, help, strain search, then usage for any other command.
/// [`ReplySender`] goes first so its after() delivers whatever reply the chain settled on.
pub fn build_handler_chain(bot: Arc<dyn Bot>, directory: Arc<dyn Directory>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(ReplySender::new(bot)))
        .add_handler(Arc::new(LocationHandler::new(directory.clone())))
        .add_handler(Arc::new(UsageHandler::new()))
        .add_handler(Arc::new(StrainSearchHandler::new(directory)))
        .add_handler(Arc::new(UsageHandler::for_unknown_commands()))
}

/// Main entry: validate config, init logging to `LOG_FILE` at `LOG_LEVEL`, build the Leafly client, Telegram bot and chain, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(Path::new(&config.log_file), &config.log_level)?;

    info!(
        leafly_url = %config.leafly.base_url,
        log_file = %config.log_file,
        log_level = %config.log_level,
        "Initializing bot"
    );

    let directory: Arc<dyn Directory> = Arc::new(LeaflyClient::new(config.leafly.clone())?);
    let teloxide_bot = build_teloxide_bot(&config.telegram)?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let handler_chain = build_handler_chain(bot, directory);

    info!(handlers = handler_chain.len(), "Bot started successfully");

    run_repl(teloxide_bot, handler_chain).await
}
