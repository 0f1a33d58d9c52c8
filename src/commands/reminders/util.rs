use crate::store::{Reminder, ReminderKind};
use crate::util::{truncate_to_minute, TIMESTAMP_FORMAT};
use crate::RegexCache;
use ::serenity::constants::MESSAGE_CODE_LIMIT;
use chrono::{NaiveDateTime, TimeDelta};
use thiserror::Error;

/// Rows per `/list` message, as long as they fit into one Discord message.
pub const PAGE_ITEMS: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("no time given")]
    MissingTime,
    #[error("invalid interval {0:?}")]
    InvalidInterval(String),
    #[error("interval {0:?} is out of range")]
    IntervalOutOfRange(String),
    #[error("invalid timestamp {0:?}")]
    InvalidTimestamp(String),
    #[error("invalid reminder id {0:?}")]
    InvalidId(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReminder {
    pub due_at: NaiveDateTime,
    pub kind: ReminderKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTarget {
    All,
    One(u64),
}

fn interval_to_delta(count: i64, unit: &str) -> Option<TimeDelta> {
    match unit {
        "m" => TimeDelta::try_minutes(count),
        "h" => TimeDelta::try_hours(count),
        _ => None,
    }
}

/// Parses the arguments of `/add`.
///
/// `25m <text>` and `2h <text>` are relative to `now`, `1.1.2025 12:15 <text>`
/// is absolute. A first token ending in `m` or `h` is always read as an interval.
pub fn parse_add(
    regex_cache: &RegexCache, args: &str, now: NaiveDateTime,
) -> Result<NewReminder, ParseError> {
    let tokens: Vec<&str> = args.trim().split(' ').collect();
    let first = tokens[0];
    if first.is_empty() {
        return Err(ParseError::MissingTime);
    }

    if first.ends_with(['m', 'h']) {
        let Some(captures) = regex_cache.interval.captures(first) else {
            return Err(ParseError::InvalidInterval(first.to_string()));
        };
        let count = captures[1]
            .parse::<i64>()
            .map_err(|_| ParseError::IntervalOutOfRange(first.to_string()))?;
        let due_at = interval_to_delta(count, &captures[2])
            .and_then(|delta| now.checked_add_signed(delta))
            .ok_or_else(|| ParseError::IntervalOutOfRange(first.to_string()))?;
        return Ok(NewReminder {
            due_at: truncate_to_minute(due_at),
            kind: ReminderKind::Interval,
            text: tokens[1..].join(" "),
        });
    }

    let Some(time) = tokens.get(1) else {
        return Err(ParseError::InvalidTimestamp(first.to_string()));
    };
    let timestamp = format!("{first} {time}");
    let due_at = NaiveDateTime::parse_from_str(&timestamp, TIMESTAMP_FORMAT)
        .map_err(|_| ParseError::InvalidTimestamp(timestamp))?;
    Ok(NewReminder { due_at, kind: ReminderKind::Timestamp, text: tokens[2..].join(" ") })
}

/// Parses the arguments of `/dismiss`: `all` or a reminder id.
pub fn parse_dismiss(args: &str) -> Result<DismissTarget, ParseError> {
    let token = args.trim().split(' ').next().unwrap_or_default();
    if token == "all" {
        return Ok(DismissTarget::All);
    }
    token
        .parse::<u64>()
        .map(DismissTarget::One)
        .map_err(|_| ParseError::InvalidId(token.to_string()))
}

/// Cuts `text` to at most `max_chars` characters, marking the cut with `…`.
fn shorten(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    short.push('…');
    short
}

/// The message the scheduler delivers for a due reminder, cut to fit Discord.
pub fn reminder_message(reminder: &Reminder) -> String {
    let frame = format!("Reminder #{0}\n\n\n/dismiss {0}", reminder.id).chars().count();
    let text = shorten(&reminder.text, MESSAGE_CODE_LIMIT.saturating_sub(frame));
    format!("Reminder #{0}\n{1}\n\n/dismiss {0}", reminder.id, text)
}

fn list_row(reminder: &Reminder) -> String {
    let due_at = reminder.due_at.format(TIMESTAMP_FORMAT).to_string();
    let frame = format!("#{}\t\"\" @ {due_at}\n", reminder.id).chars().count();
    let text = shorten(&reminder.text, MESSAGE_CODE_LIMIT.saturating_sub(frame));
    format!("#{}\t\"{text}\" @ {due_at}\n", reminder.id)
}

/// Formats reminders as `/list` rows. A message holds `PAGE_ITEMS` rows, fewer
/// when the next row would push it past `MESSAGE_CODE_LIMIT`.
pub fn list_pages(reminders: &[Reminder]) -> Vec<String> {
    let mut pages = Vec::new();
    let mut page = String::new();
    let (mut rows, mut chars) = (0, 0);
    for reminder in reminders {
        let row = list_row(reminder);
        let row_chars = row.chars().count();
        if rows == PAGE_ITEMS || (rows > 0 && chars + row_chars > MESSAGE_CODE_LIMIT) {
            pages.push(std::mem::take(&mut page));
            (rows, chars) = (0, 0);
        }
        page.push_str(&row);
        rows += 1;
        chars += row_chars;
    }
    if rows > 0 {
        pages.push(page);
    }
    pages
}
