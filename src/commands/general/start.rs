use crate::commands::util::log_invocation;
use crate::{Context, Error};

pub fn greeting(name: Option<&str>) -> String {
    let intro = "i am a bot to remind you of things you would else forget.\n\
        To get a list of my commands please send me a /help message.";
    match name.filter(|name| !name.is_empty()) {
        Some(name) => format!("Hi {name}, {intro}"),
        None => format!("Hi, {intro}"),
    }
}

/// Initial start of the bot
#[poise::command(slash_command, prefix_command, discard_spare_arguments)]
pub async fn start(ctx: Context<'_>) -> Result<(), Error> {
    log_invocation(ctx);
    let author = ctx.author();
    let name = author.global_name.as_deref().unwrap_or(&author.name);
    ctx.say(greeting(Some(name))).await?;
    Ok(())
}
