use crate::commands::reminders::util::{parse_dismiss, DismissTarget};
use crate::commands::util::log_invocation;
use crate::store::ReminderStore;
use crate::{Context, Error};

pub const DISMISSED_ALL: &str = "Dismissed all reminder.";
pub const DISMISS_ALL_FAILED: &str = "Could not dismiss all reminder, sorry :(";
pub const DISMISSED: &str = "Reminder was dismissed.";
pub const NOT_FOUND: &str = "Reminder not found. Please check ID.";

/// Removes the reminder(s) named by `args` and returns the reply text.
pub fn dismiss_reminder(store: &ReminderStore, args: &str) -> &'static str {
    match parse_dismiss(args) {
        Ok(DismissTarget::All) => match store.delete_all() {
            Ok(()) => DISMISSED_ALL,
            Err(e) => {
                tracing::warn!("Could not dismiss all reminders: {e}");
                DISMISS_ALL_FAILED
            }
        },
        Ok(DismissTarget::One(id)) => match store.delete(id) {
            Ok(true) => DISMISSED,
            Ok(false) => NOT_FOUND,
            Err(e) => {
                tracing::warn!("Could not dismiss reminder #{id}: {e}");
                NOT_FOUND
            }
        },
        Err(e) => {
            tracing::warn!("{e}");
            NOT_FOUND
        }
    }
}

/// Dismiss a reminder
///
/// /dismiss <id|all>
#[poise::command(slash_command, prefix_command, discard_spare_arguments)]
pub async fn dismiss(
    ctx: Context<'_>, #[description = "Reminder ID, or \"all\""] target: Option<String>,
) -> Result<(), Error> {
    log_invocation(ctx);
    let reply = dismiss_reminder(&ctx.data().store, target.as_deref().unwrap_or_default());
    ctx.say(reply).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ReminderKind;
    use chrono::NaiveDate;

    fn seeded(dir: &tempfile::TempDir, count: u32) -> ReminderStore {
        let store = ReminderStore::open(dir.path().join("reminders.csv")).expect("open");
        let due = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
        for i in 0..count {
            store.append(due, ReminderKind::Timestamp, &format!("r{i}")).expect("append");
        }
        store
    }

    #[test]
    fn dismissing_one_reminder() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = seeded(&dir, 3);

        assert_eq!(dismiss_reminder(&store, "1"), DISMISSED);
        let ids: Vec<u64> = store.load().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn dismissing_unknown_or_garbage_ids() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = seeded(&dir, 2);

        assert_eq!(dismiss_reminder(&store, "9"), NOT_FOUND);
        assert_eq!(dismiss_reminder(&store, "one"), NOT_FOUND);
        assert_eq!(dismiss_reminder(&store, ""), NOT_FOUND);
        assert_eq!(store.load().len(), 2);
    }

    #[test]
    fn dismissing_everything() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = seeded(&dir, 4);

        assert_eq!(dismiss_reminder(&store, "all"), DISMISSED_ALL);
        assert!(store.load().is_empty());
    }
}
