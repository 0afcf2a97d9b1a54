//! REPL runner: converts teloxide messages to core::Message and hands each to the HandlerChain in its own task.

use anyhow::Result;
use bot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Starts long polling with the given teloxide Bot and HandlerChain.
/// Each update is converted to core::Message and processed by `chain.handle` in a spawned task,
/// so a slow directory call in one chat never delays another.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        info!(username = ?me.user.username, "Connected to Telegram");
    }

    let chain = handler_chain;
    teloxide::repl(
        bot,
        move |_bot: Bot, msg: teloxide::types::Message| {
            let chain = chain.clone();

            async move {
                let core_msg = TelegramMessageWrapper(&msg).to_core();

                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    message_type = %core_msg.message_type,
                    received_at = %core_msg.created_at,
                    "Received message"
                );

                tokio::spawn(async move {
                    if let Err(e) = chain.handle(&core_msg).await {
                        error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                    }
                });

                Ok(())
            }
        },
    )
    .await;

    Ok(())
}
