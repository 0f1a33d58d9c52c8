pub mod general;
pub mod reminders;
mod util;

use crate::{Data, Error};
use poise::FrameworkError;
use std::sync::Arc;

pub fn commands() -> Vec<crate::Command> {
    general::commands()
        .into_iter()
        .chain(reminders::commands())
        .collect()
}

/// Turns framework errors into log lines and, where possible, a reply.
pub async fn on_error(error: FrameworkError<'_, Arc<Data>, Error>) {
    match error {
        FrameworkError::UnknownCommand { ctx, msg, .. } => {
            tracing::info!(
                "Unknown command received from user: {} in channel: {} - Message: {}",
                msg.author.name,
                msg.channel_id,
                msg.content
            );
            let http = ctx.http.as_ref();
            if let Err(e) = general::unknown::unknown_command(http, msg.channel_id).await {
                tracing::warn!("could not answer unknown command: {e}");
            }
        }
        FrameworkError::Setup { error, .. } => {
            tracing::error!("failed to register commands: {error}");
            std::process::exit(1);
        }
        FrameworkError::Command { error, ctx, .. } => {
            tracing::warn!("/{} failed: {error}", ctx.command().name);
            if let Err(e) = ctx.say("Sorry, something went wrong :(").await {
                tracing::warn!("could not report failure: {e}");
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::warn!("error while handling error: {e}");
            }
        }
    }
}
