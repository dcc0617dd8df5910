//! Keeps the single display message in sync with the stored inventory.
//!
//! The message is found through the persisted pointer. If the pointer is
//! missing, malformed, or names a message that can no longer be fetched, a new
//! placeholder message is posted and the pointer is replaced.

use serenity::model::id::{ChannelId, MessageId};
use tracing::{info, warn};

use super::platform::ChatPlatform;
use crate::commands::inventory::ui;
use crate::constants::DISPLAY_PLACEHOLDER;
use crate::database::store::JsonStore;
use crate::error::BotResult;

#[derive(Debug, Clone, Copy)]
pub struct DisplaySync {
    channel: ChannelId,
}

impl DisplaySync {
    pub fn new(channel: ChannelId) -> Self {
        Self { channel }
    }

    pub fn channel(&self) -> ChannelId {
        self.channel
    }

    /// Returns the id of a live display message, creating one if needed.
    pub async fn ensure(
        &self,
        platform: &dyn ChatPlatform,
        store: &JsonStore,
    ) -> BotResult<MessageId> {
        if let Some(raw) = store.load_display_pointer().await? {
            match parse_message_id(&raw) {
                Some(id) => match platform.fetch_message(self.channel, id).await {
                    Ok(()) => return Ok(id),
                    Err(e) => {
                        info!(target: "inventory.display", message_id = %raw, error = %e, "Display message not found, creating a new one");
                    }
                },
                None => {
                    warn!(target: "inventory.display", pointer = %raw, "Stored display pointer is not a message id");
                }
            }
        }

        let id = platform
            .send_message(self.channel, DISPLAY_PLACEHOLDER)
            .await?;
        store.save_display_pointer(&id.get().to_string()).await?;
        info!(target: "inventory.display", message_id = %id, "Created display message");
        Ok(id)
    }

    /// Overwrites the display message with the current inventory.
    pub async fn update(&self, platform: &dyn ChatPlatform, store: &JsonStore) -> BotResult<()> {
        let doc = store.load_inventory().await?;
        let id = self.ensure(platform, store).await?;
        platform
            .edit_message(self.channel, id, &ui::render(&doc))
            .await
    }
}

fn parse_message_id(raw: &str) -> Option<MessageId> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|&v| v != 0)
        .map(MessageId::new)
}
