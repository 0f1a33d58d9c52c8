use crate::Error;
use async_trait::async_trait;
use poise::serenity_prelude::{ChannelId, Http};

/// Sends plain text to a conversation on the chat platform.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn send(&self, channel: ChannelId, text: &str) -> Result<(), Error>;
}

#[async_trait]
impl Gateway for Http {
    async fn send(&self, channel: ChannelId, text: &str) -> Result<(), Error> {
        channel.say(self, text).await?;
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Collects everything sent instead of talking to Discord.
    #[derive(Default)]
    pub struct RecordingGateway {
        pub sent: Mutex<Vec<(ChannelId, String)>>,
        pub fail: bool,
    }

    impl RecordingGateway {
        pub fn failing() -> Self {
            Self { fail: true, ..Default::default() }
        }

        pub fn texts(&self) -> Vec<String> {
            self.sent.lock().unwrap().iter().map(|(_, text)| text.clone()).collect()
        }
    }

    #[async_trait]
    impl Gateway for RecordingGateway {
        async fn send(&self, channel: ChannelId, text: &str) -> Result<(), Error> {
            if self.fail {
                return Err("gateway unavailable".into());
            }
            self.sent.lock().unwrap().push((channel, text.to_string()));
            Ok(())
        }
    }
}
