use crate::commands::reminders::util::reminder_message;
use crate::gateway::Gateway;
use crate::store::Reminder;
use crate::util::truncate_to_minute;
use crate::Data;
use chrono::NaiveDateTime;

/// Reminders whose due time is at or before `now`, compared at minute precision.
pub fn due_reminders(
    reminders: &[Reminder], now: NaiveDateTime,
) -> impl Iterator<Item = &Reminder> {
    let now = truncate_to_minute(now);
    reminders.iter().filter(move |r| r.due_at <= now)
}

/// Sends every due reminder to the owner channel. Returns how many were sent.
///
/// Nothing is removed from the store here; a reminder keeps firing on every
/// check until it is dismissed.
pub async fn check_reminders<G: Gateway + ?Sized>(
    gateway: &G, data: &Data, now: NaiveDateTime,
) -> usize {
    let reminders = data.store.load();
    let mut sent = 0;
    for reminder in due_reminders(&reminders, now) {
        tracing::info!("Sending reminder #{} \"{}\"", reminder.id, reminder.text);
        match gateway.send(data.owner_channel, &reminder_message(reminder)).await {
            Ok(()) => sent += 1,
            Err(e) => tracing::warn!("could not deliver reminder #{}: {e}", reminder.id),
        }
    }
    sent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::testing::RecordingGateway;
    use crate::store::ReminderKind;
    use chrono::{NaiveDate, TimeDelta};

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn due_set_includes_past_and_present_only() {
        let reminders: Vec<Reminder> = [-5i64, 0, 1]
            .iter()
            .enumerate()
            .map(|(id, offset)| Reminder {
                id: id as u64,
                due_at: noon() + TimeDelta::minutes(*offset),
                kind: ReminderKind::Interval,
                text: String::new(),
            })
            .collect();

        let now = noon() + TimeDelta::seconds(59);
        let due: Vec<u64> = due_reminders(&reminders, now).map(|r| r.id).collect();
        assert_eq!(due, vec![0, 1]);
    }

    #[tokio::test]
    async fn due_reminders_go_to_the_owner() {
        let dir = tempfile::tempdir().expect("temp dir");
        let data = Data::for_tests(dir.path());
        data.store.append(noon(), ReminderKind::Timestamp, "lunch").expect("append");
        data.store
            .append(noon() + TimeDelta::hours(1), ReminderKind::Timestamp, "later")
            .expect("append");
        let gateway = RecordingGateway::default();

        assert_eq!(check_reminders(&gateway, &data, noon()).await, 1);
        let sent = gateway.sent.lock().unwrap().clone();
        let expected = "Reminder #0\nlunch\n\n/dismiss 0".to_string();
        assert_eq!(sent, vec![(data.owner_channel, expected)]);
    }

    #[tokio::test]
    async fn undismissed_reminder_fires_every_tick() {
        let dir = tempfile::tempdir().expect("temp dir");
        let data = Data::for_tests(dir.path());
        data.store.append(noon(), ReminderKind::Interval, "stand up").expect("append");
        let gateway = RecordingGateway::default();

        for tick in 0..3 {
            let now = noon() + TimeDelta::minutes(tick);
            assert_eq!(check_reminders(&gateway, &data, now).await, 1);
        }
        assert_eq!(gateway.texts().len(), 3);
        assert_eq!(data.store.load().len(), 1);

        assert!(data.store.delete(0).expect("dismiss"));
        assert_eq!(check_reminders(&gateway, &data, noon() + TimeDelta::minutes(3)).await, 0);
    }

    #[tokio::test]
    async fn failed_delivery_does_not_stop_the_tick() {
        let dir = tempfile::tempdir().expect("temp dir");
        let data = Data::for_tests(dir.path());
        data.store.append(noon(), ReminderKind::Interval, "a").expect("append");
        data.store.append(noon(), ReminderKind::Interval, "b").expect("append");

        assert_eq!(check_reminders(&RecordingGateway::failing(), &data, noon()).await, 0);
    }

    #[tokio::test]
    async fn unreadable_store_sends_nothing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let data = Data::for_tests(dir.path());
        std::fs::write(data.store.path(), "not,a,valid\n").expect("corrupt store");
        let gateway = RecordingGateway::default();

        assert_eq!(check_reminders(&gateway, &data, noon()).await, 0);
        assert!(gateway.texts().is_empty());
    }
}
