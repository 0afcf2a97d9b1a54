//! Leafly credentials and endpoint, loaded once at startup from LEAFLY_APP_ID, LEAFLY_APP_KEY and LEAFLY_API_URL.

use std::env;

use crate::error::{LeaflyError, Result};

pub const DEFAULT_BASE_URL: &str = "http://data.leafly.com";

#[derive(Debug, Clone)]
pub struct LeaflyConfig {
    /// LEAFLY_APP_ID, sent as the `app_id` header.
    pub app_id: String,
    /// LEAFLY_APP_KEY, sent as the `app_key` header.
    pub app_key: String,
    /// LEAFLY_API_URL, without trailing slash.
    pub base_url: String,
}

impl LeaflyConfig {
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Both credentials are required; a missing one is a fatal startup error.
    pub fn from_env() -> Result<Self> {
        let app_id = required_var("LEAFLY_APP_ID")?;
        let app_key = required_var("LEAFLY_APP_KEY")?;
        let config = Self::new(app_id, app_key);
        Ok(match env::var("LEAFLY_API_URL") {
            Ok(url) if !url.trim().is_empty() => config.with_base_url(url.trim()),
            _ => config,
        })
    }

    pub fn validate(&self) -> Result<()> {
        reqwest::Url::parse(&self.base_url).map_err(|e| {
            LeaflyError::Config(format!("LEAFLY_API_URL is not a valid URL ({}): {}", e, self.base_url))
        })?;
        Ok(())
    }

    pub fn strains_url(&self) -> String {
        format!("{}/strains", self.base_url)
    }

    pub fn locations_url(&self) -> String {
        format!("{}/locations", self.base_url)
    }
}

fn required_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| LeaflyError::Config(format!("{} not set", name)))
}
