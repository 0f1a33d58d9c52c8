use crate::{Context, Error};

/// Logs who sent which command, like every handler does on entry.
pub fn log_invocation(ctx: Context<'_>) {
    tracing::info!(
        "Command /{} received from user: {} in channel: {} - Message: {}",
        ctx.command().name,
        ctx.author().name,
        ctx.channel_id(),
        ctx.invocation_string()
    );
}

/// Sends each message as its own reply, in order.
pub async fn say_all(ctx: Context<'_>, messages: Vec<String>) -> Result<(), Error> {
    for message in messages {
        ctx.say(message).await?;
    }
    Ok(())
}
