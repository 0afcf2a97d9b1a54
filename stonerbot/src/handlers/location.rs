use async_trait::async_trait;
use bot_core::{Handler, HandlerResponse, Message, Result};
use leafly_client::Directory;
use std::sync::Arc;
use tracing::info;

use crate::messages::{ENTRY_SEPARATOR, MSG_NO_STORES};

/// Dispensary search for messages carrying a shared location.
pub struct LocationHandler {
    directory: Arc<dyn Directory>,
}

impl LocationHandler {
    pub fn new(directory: Arc<dyn Directory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl Handler for LocationHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(location) = message.location else {
            return Ok(HandlerResponse::Continue);
        };

        let stores = self
            .directory
            .search_locations(location.latitude, location.longitude)
            .await;

        info!(
            sender = %message.user,
            latitude = location.latitude,
            longitude = location.longitude,
            found = stores.len(),
            "Store search done"
        );

        let reply = if stores.is_empty() {
            MSG_NO_STORES.to_string()
        } else {
            stores.join(ENTRY_SEPARATOR)
        };
        Ok(HandlerResponse::Reply(reply))
    }
}
