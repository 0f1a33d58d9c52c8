use super::help::HELP_TEXT;
use crate::gateway::Gateway;
use crate::Error;
use poise::serenity_prelude::ChannelId;

pub const UNKNOWN_COMMAND: &str = "Sorry, i don't know this command :(";

/// The apology, then the help text.
pub fn unknown_replies() -> [&'static str; 2] {
    [UNKNOWN_COMMAND, HELP_TEXT]
}

/// Replies to a prefix command nothing is registered for.
pub async fn unknown_command<G: Gateway + ?Sized>(
    gateway: &G, channel: ChannelId,
) -> Result<(), Error> {
    for reply in unknown_replies() {
        gateway.send(channel, reply).await?;
    }
    Ok(())
}
