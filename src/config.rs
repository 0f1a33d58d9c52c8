use poise::serenity_prelude::ChannelId;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_REMINDER_FILE: &str = "reminders.csv";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing {0}")]
    Missing(&'static str),
    #[error("OWNER_CHANNEL_ID must be a non-zero channel id, got {0:?}")]
    InvalidOwnerChannel(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub owner_channel: ChannelId,
    pub reminder_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| {
            lookup(key).filter(|value| !value.trim().is_empty()).ok_or(ConfigError::Missing(key))
        };
        let token = required("DISCORD_TOKEN")?;
        let owner = required("OWNER_CHANNEL_ID")?;
        let owner_channel = match owner.trim().parse::<u64>() {
            Ok(id) if id != 0 => ChannelId::new(id),
            _ => return Err(ConfigError::InvalidOwnerChannel(owner)),
        };
        let reminder_file = lookup("REMINDER_FILE")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_REMINDER_FILE), PathBuf::from);
        Ok(Config { token, owner_channel, reminder_file })
    }
}
