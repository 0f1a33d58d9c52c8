use crate::commands::reminders::util::parse_add;
use crate::commands::util::log_invocation;
use crate::util::{now_local, CONFIRMATION_FORMAT};
use crate::{Context, Data, Error};
use chrono::NaiveDateTime;

pub const USAGE_ERROR: &str = "Sorry, but i couldn't understand your command :(\n\
    Please try again adding your reminder in one of the following formats:\n\
    Interval: /add 25m Buy toilet paper\n\
    Time: /add 1.1.2025 12:15 Watch TV";

/// Stores the reminder described by `args` and returns the reply text.
pub fn add_reminder(data: &Data, args: &str, now: NaiveDateTime) -> String {
    let new = match parse_add(&data.regex_cache, args, now) {
        Ok(new) => new,
        Err(e) => {
            tracing::warn!("Could not parse reminder {args:?}: {e}");
            return USAGE_ERROR.to_string();
        }
    };
    match data.store.append(new.due_at, new.kind, &new.text) {
        Ok(reminder) => format!("Reminder set to {}", reminder.due_at.format(CONFIRMATION_FORMAT)),
        Err(e) => {
            tracing::warn!("Could not add reminder: {e}");
            USAGE_ERROR.to_string()
        }
    }
}

/// Add a new reminder
///
/// /add <count><m|h> <text> or /add <dd.mm.yyyy> <HH:MM> <text>
#[poise::command(slash_command, prefix_command)]
pub async fn add(
    ctx: Context<'_>,
    #[description = "25m, 2h or dd.mm.yyyy HH:MM, followed by the reminder text"]
    #[rest]
    args: Option<String>,
) -> Result<(), Error> {
    log_invocation(ctx);
    let reply = add_reminder(ctx.data(), args.as_deref().unwrap_or_default(), now_local());
    ctx.say(reply).await?;
    Ok(())
}
