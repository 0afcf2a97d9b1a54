use async_trait::async_trait;
use bot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Sends the chain's final `Reply` back to the originating chat. Register it first so its after() runs last.
pub struct ReplySender {
    bot: Arc<dyn Bot>,
}

impl ReplySender {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for ReplySender {
    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let HandlerResponse::Reply(text) = response else {
            return Ok(());
        };

        if let Err(e) = self.bot.reply_to(message, text).await {
            error!(error = %e, chat_id = message.chat.id, "Failed to send reply");
            return Err(e);
        }
        info!(chat_id = message.chat.id, reply_len = text.len(), "Reply sent");
        Ok(())
    }
}
