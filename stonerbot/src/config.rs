//! Bot configuration: Telegram transport, Leafly credentials and log file, all read once from env at startup.

use anyhow::Result;
use bot_telegram::TelegramConfig;
use leafly_client::LeaflyConfig;
use std::env;

pub const DEFAULT_LOG_FILE: &str = "logs/stonerbot.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub leafly: LeaflyConfig,
    /// LOG_FILE
    pub log_file: String,
    /// LOG_LEVEL, an EnvFilter directive; RUST_LOG still wins when set.
    pub log_level: String,
}

impl BotConfig {
    /// Loads from environment. `token` overrides API_TOKEN if provided.
    /// Missing API_TOKEN, LEAFLY_APP_ID or LEAFLY_APP_KEY is an error.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let leafly = LeaflyConfig::from_env()?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        Ok(Self {
            telegram,
            leafly,
            log_file,
            log_level,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        self.leafly.validate()?;
        Ok(())
    }
}
