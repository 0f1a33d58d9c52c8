use crate::commands::util::log_invocation;
use crate::{Context, Error};

pub const HELP_TEXT: &str = "Currently supported commands:\n\
    /start\nInitial start of the bot\n\n\
    /help\nShow this message\n\n\
    /add\nAdd a new reminder.\n\
    This command supports both interval and timestamp reminders.\n\
    To add a new interval reminder the command needs to be in format\n\
    /add <minutes|hours><m|h> <reminder_text>\n\
    To add a new timestamp reminder the command needs to be in format\n\
    /add <dd>.<mm>.<yyyy> <HH>:<MM> <reminder_text>\n\n\
    /dismiss <id|all>\nDismiss either a specific reminder with ID <id> or all reminders.\n\n\
    /list\nList all currently active reminders.";

/// Show the supported commands
#[poise::command(slash_command, prefix_command, discard_spare_arguments)]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    log_invocation(ctx);
    ctx.say(HELP_TEXT).await?;
    Ok(())
}
