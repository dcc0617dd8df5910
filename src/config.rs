//! Runtime configuration, read from the process environment (after `.env` is merged).

use std::path::PathBuf;

use serenity::model::id::ChannelId;

use crate::constants::{
    DEFAULT_ADMIN_CHANNEL_ID, DEFAULT_DISPLAY_CHANNEL_ID, DEFAULT_DISPLAY_MESSAGE_FILE,
    DEFAULT_INVENTORY_FILE, DEFAULT_PREFIX,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DISCORD_TOKEN (or TOKEN) is not set")]
    MissingToken,
    #[error("{var} must be a non-zero channel id, got `{value}`")]
    InvalidChannelId { var: &'static str, value: String },
    #[error("COMMAND_PREFIX must be exactly one character, got `{0}`")]
    InvalidPrefix(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub admin_channel: ChannelId,
    pub display_channel: ChannelId,
    pub prefix: char,
    pub inventory_file: PathBuf,
    pub display_message_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token = get("DISCORD_TOKEN")
            .or_else(|| get("TOKEN"))
            .ok_or(ConfigError::MissingToken)?;

        let admin_channel = channel(
            get("ADMIN_CHANNEL_ID"),
            "ADMIN_CHANNEL_ID",
            DEFAULT_ADMIN_CHANNEL_ID,
        )?;
        let display_channel = channel(
            get("DISPLAY_CHANNEL_ID"),
            "DISPLAY_CHANNEL_ID",
            DEFAULT_DISPLAY_CHANNEL_ID,
        )?;

        let prefix = match get("COMMAND_PREFIX") {
            None => DEFAULT_PREFIX,
            Some(raw) => {
                let mut chars = raw.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => return Err(ConfigError::InvalidPrefix(raw)),
                }
            }
        };

        Ok(Self {
            token,
            admin_channel,
            display_channel,
            prefix,
            inventory_file: get("INVENTORY_FILE")
                .unwrap_or_else(|| DEFAULT_INVENTORY_FILE.to_string())
                .into(),
            display_message_file: get("DISPLAY_MESSAGE_FILE")
                .unwrap_or_else(|| DEFAULT_DISPLAY_MESSAGE_FILE.to_string())
                .into(),
        })
    }
}

fn channel(
    raw: Option<String>,
    var: &'static str,
    default: u64,
) -> Result<ChannelId, ConfigError> {
    let Some(raw) = raw else {
        return Ok(ChannelId::new(default));
    };
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|&id| id != 0)
        .map(ChannelId::new)
        .ok_or_else(|| ConfigError::InvalidChannelId {
            var,
            value: raw.clone(),
        })
}
