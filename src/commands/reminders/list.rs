use crate::commands::reminders::util::list_pages;
use crate::commands::util::{log_invocation, say_all};
use crate::store::Reminder;
use crate::{Context, Error};

pub const NO_REMINDERS: &str = "No active reminder.";

pub fn list_messages(reminders: &[Reminder]) -> Vec<String> {
    if reminders.is_empty() {
        return vec![NO_REMINDERS.to_string()];
    }
    list_pages(reminders)
}

/// List all active reminders
#[poise::command(slash_command, prefix_command, discard_spare_arguments)]
pub async fn list(ctx: Context<'_>) -> Result<(), Error> {
    log_invocation(ctx);
    let reminders = ctx.data().store.load();
    say_all(ctx, list_messages(&reminders)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ReminderKind;
    use chrono::NaiveDate;

    #[test]
    fn empty_store_says_so() {
        assert_eq!(list_messages(&[]), vec![NO_REMINDERS.to_string()]);
    }

    #[test]
    fn single_reminder_is_one_message() {
        let reminder = Reminder {
            id: 0,
            due_at: NaiveDate::from_ymd_opt(2020, 2, 20).unwrap().and_hms_opt(16, 0, 0).unwrap(),
            kind: ReminderKind::Timestamp,
            text: "Buy toilet paper".into(),
        };
        assert_eq!(
            list_messages(&[reminder]),
            vec!["#0\t\"Buy toilet paper\" @ 20.02.2020 16:00\n".to_string()]
        );
    }
}
