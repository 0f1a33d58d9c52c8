use chrono::{FixedOffset, NaiveDateTime, Offset, Timelike, Utc};

/// Reminders live in UTC+1, without daylight saving.
pub const UTC_OFFSET_SECONDS: i32 = 3600;
/// How due times are written to the store and shown in lists.
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";
/// How due times are shown when a reminder is created.
pub const CONFIRMATION_FORMAT: &str = "%d.%m.%Y (%a) @ %H:%M";

pub fn bot_offset() -> FixedOffset {
    FixedOffset::east_opt(UTC_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}

/// Current wall-clock time in the bot's offset, full precision.
pub fn now_local() -> NaiveDateTime {
    Utc::now().with_timezone(&bot_offset()).naive_local()
}

pub fn truncate_to_minute(time: NaiveDateTime) -> NaiveDateTime {
    time.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(time)
}
