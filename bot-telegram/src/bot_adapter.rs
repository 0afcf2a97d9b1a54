//! Wraps teloxide::Bot and implements [`bot_core::Bot`]. Production code sends replies via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use bot_core::{Bot as CoreBot, BotError, Chat, Result};
use teloxide::{prelude::*, types::ChatId};
use tracing::info;

use crate::config::TelegramConfig;

/// Thin wrapper around teloxide::Bot that implements bot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(())
    }
}

/// Builds the teloxide Bot from config, pointing it at `telegram_api_url` when one is set.
pub fn build_teloxide_bot(config: &TelegramConfig) -> anyhow::Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url_str) => {
            let url = reqwest::Url::parse(url_str).map_err(|e| {
                anyhow::anyhow!("TELEGRAM_API_URL is not a valid URL ({}): {}", e, url_str)
            })?;
            info!(url = %url, "Using custom Telegram API URL");
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}
