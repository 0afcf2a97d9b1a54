use async_trait::async_trait;
use bot_core::{Handler, HandlerResponse, Message, Result};
use regex::Regex;
use tracing::info;

use crate::messages::USAGE;

/// `/start`, `/help` or a bare `help` opening the message, optionally addressed as `/help@botname`.
const HELP_PATTERN: &str = r"(?i)^\s*(/start|/?help)(@\w+)?\b";
/// Any slash command.
const COMMAND_PATTERN: &str = r"^\s*/";

/// Replies with the static usage text, without calling the directory.
pub struct UsageHandler {
    pattern: Regex,
}

impl UsageHandler {
    /// Matches the help and start commands.
    pub fn new() -> Self {
        Self::with_pattern(HELP_PATTERN)
    }

    /// Matches every slash command; placed last to answer commands nobody else took.
    pub fn for_unknown_commands() -> Self {
        Self::with_pattern(COMMAND_PATTERN)
    }

    fn with_pattern(pattern: &str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("usage pattern is a valid regex"),
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

impl Default for UsageHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Handler for UsageHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !self.matches(&message.content) {
            return Ok(HandlerResponse::Continue);
        }
        info!(sender = %message.user, text = %message.content, "Usage requested");
        Ok(HandlerResponse::Reply(USAGE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_pattern() {
        let usage = UsageHandler::new();
        for text in ["/start", "/help", "help", "HELP", "/help@stonerbot", "help me", " /start"] {
            assert!(usage.matches(text), "{}", text);
        }
        for text in ["helpful strain", "blue dream", "/strains help", "", "/starting", "i need help"] {
            assert!(!usage.matches(text), "{}", text);
        }
    }

    #[test]
    fn test_unknown_command_pattern() {
        let usage = UsageHandler::for_unknown_commands();
        assert!(usage.matches("/foo"));
        assert!(usage.matches("/strains"));
        assert!(!usage.matches("blue dream"));
        assert!(!usage.matches(""));
    }
}
