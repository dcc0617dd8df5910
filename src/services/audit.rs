//! Posts one entry per successful mutation to the admin channel.

use chrono::Local;
use serenity::model::id::ChannelId;

use super::platform::ChatPlatform;
use crate::commands::inventory::logic::Mutation;
use crate::commands::inventory::ui;
use crate::error::{BotError, BotResult};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy)]
pub struct AuditLog {
    channel: ChannelId,
}

impl AuditLog {
    pub fn new(channel: ChannelId) -> Self {
        Self { channel }
    }

    pub async fn log_change(
        &self,
        platform: &dyn ChatPlatform,
        user: &str,
        mutation: &Mutation,
    ) -> BotResult<()> {
        let now = Local::now().format(TIMESTAMP_FORMAT).to_string();
        platform
            .send_message(self.channel, &ui::audit_entry(user, mutation, &now))
            .await?;
        Ok(())
    }

    /// Best-effort notice for failures that never reached the audit stage.
    pub async fn report_failure(
        &self,
        platform: &dyn ChatPlatform,
        user: &str,
        error: &BotError,
    ) -> BotResult<()> {
        platform
            .send_message(self.channel, &ui::failure_notice(user, error))
            .await?;
        Ok(())
    }
}
