//! Minimal transport config: bot token and optional API URL.
//! Loaded from the API_TOKEN and TELEGRAM_API_URL (or TELOXIDE_API_URL) environment variables.

use anyhow::Result;
use std::env;

/// Telegram connection settings.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// API_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from environment. `token` overrides API_TOKEN if provided; otherwise API_TOKEN is required.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("API_TOKEN").map_err(|_| anyhow::anyhow!("API_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Builds config with the given token and the default API URL.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    /// Rejects a telegram_api_url that is set but not a valid URL.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}
