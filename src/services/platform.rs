//! The narrow slice of the chat platform the inventory core depends on.
//! Kept behind a trait so the display and audit paths can run against an
//! in-memory fake in tests.

use std::sync::Arc;

use async_trait::async_trait;
use serenity::builder::EditMessage;
use serenity::http::Http;
use serenity::model::id::{ChannelId, MessageId};

use crate::error::BotResult;

#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Succeeds only if the message still exists in `channel`.
    async fn fetch_message(&self, channel: ChannelId, message: MessageId) -> BotResult<()>;

    /// Posts a new message and returns its id.
    async fn send_message(&self, channel: ChannelId, content: &str) -> BotResult<MessageId>;

    /// Replaces the content of an existing message.
    async fn edit_message(
        &self,
        channel: ChannelId,
        message: MessageId,
        content: &str,
    ) -> BotResult<()>;
}

/// Discord implementation backed by serenity's REST client.
pub struct DiscordPlatform {
    http: Arc<Http>,
}

impl DiscordPlatform {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ChatPlatform for DiscordPlatform {
    async fn fetch_message(&self, channel: ChannelId, message: MessageId) -> BotResult<()> {
        channel.message(&self.http, message).await?;
        Ok(())
    }

    async fn send_message(&self, channel: ChannelId, content: &str) -> BotResult<MessageId> {
        let sent = channel.say(&self.http, content).await?;
        Ok(sent.id)
    }

    async fn edit_message(
        &self,
        channel: ChannelId,
        message: MessageId,
        content: &str,
    ) -> BotResult<()> {
        let builder = EditMessage::new().content(content);
        channel.edit_message(&self.http, message, builder).await?;
        Ok(())
    }
}
