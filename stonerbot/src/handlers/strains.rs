use async_trait::async_trait;
use bot_core::{Handler, HandlerResponse, Message, Result};
use leafly_client::Directory;
use regex::Regex;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::messages::{ENTRY_SEPARATOR, MSG_DEALER_UNREACHABLE, MSG_NO_STRAINS};

/// `/strains <query>`, optionally `/strains@botname <query>`; group 1 is the query.
const STRAINS_COMMAND: &str = r"(?is)^\s*/strains(?:@\w+)?\s+(.+)$";

/// Strain search for `/strains <query>` and for any plain (non-command) text.
pub struct StrainSearchHandler {
    directory: Arc<dyn Directory>,
    command: Regex,
}

impl StrainSearchHandler {
    pub fn new(directory: Arc<dyn Directory>) -> Self {
        Self {
            directory,
            command: Regex::new(STRAINS_COMMAND).expect("strains pattern is a valid regex"),
        }
    }

    /// The search text, or None when the message is a location, another command or has no text.
    pub fn extract_query(&self, message: &Message) -> Option<String> {
        if message.location.is_some() {
            return None;
        }
        let text = message.content.trim();
        if let Some(caps) = self.command.captures(text) {
            let query = caps.get(1)?.as_str().trim();
            return (!query.is_empty()).then(|| query.to_string());
        }
        if text.is_empty() || text.starts_with('/') {
            return None;
        }
        Some(text.to_string())
    }

    /// Searches and picks the reply: outage apology, "none found", or the joined strains.
    #[instrument(skip(self, message))]
    async fn search(&self, message: &Message, query: &str) -> String {
        let result = self.directory.search_strains(query).await;
        let found = result.as_ref().map(Vec::len).unwrap_or(0);

        info!(
            sender = %message.user,
            query = %query,
            found,
            "{} searched for '{}', found {}",
            message.user,
            query,
            found
        );

        match result {
            Err(_) => MSG_DEALER_UNREACHABLE.to_string(),
            Ok(strains) if strains.is_empty() => MSG_NO_STRAINS.to_string(),
            Ok(strains) => strains.join(ENTRY_SEPARATOR),
        }
    }
}

#[async_trait]
impl Handler for StrainSearchHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(query) = self.extract_query(message) else {
            return Ok(HandlerResponse::Continue);
        };
        Ok(HandlerResponse::Reply(self.search(message, &query).await))
    }
}
