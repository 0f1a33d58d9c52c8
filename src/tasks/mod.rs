use crate::gateway::Gateway;
use crate::util::now_local;
use crate::Data;
use reminders::check_reminders;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

mod reminders;

const FIRST_CHECK_DELAY: Duration = Duration::from_secs(1);
const CHECK_PERIOD: Duration = Duration::from_secs(60);

/// Checks the reminder list a second after startup and every minute after that.
pub async fn task_handler<G: Gateway + ?Sized>(gateway: Arc<G>, data: Arc<Data>) {
    let mut reminder_interval = interval_at(Instant::now() + FIRST_CHECK_DELAY, CHECK_PERIOD);
    reminder_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        reminder_interval.tick().await;

        check_reminders(gateway.as_ref(), &data, now_local()).await;
    }
}
