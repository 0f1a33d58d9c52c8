use crate::util::TIMESTAMP_FORMAT;
use chrono::NaiveDateTime;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderKind {
    Interval,
    Timestamp,
}

impl ReminderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ReminderKind::Interval => "interval",
            ReminderKind::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReminderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "interval" => Ok(ReminderKind::Interval),
            "timestamp" => Ok(ReminderKind::Timestamp),
            other => Err(format!("unknown reminder kind {other:?}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub id: u64,
    pub due_at: NaiveDateTime,
    pub kind: ReminderKind,
    pub text: String,
}

impl Reminder {
    fn to_row(&self) -> Result<String, StoreError> {
        Ok(format!(
            "{},{},{},{}",
            self.id,
            self.due_at.format(TIMESTAMP_FORMAT),
            self.kind,
            serde_json::to_string(&self.text)?
        ))
    }

    fn from_row(line: usize, row: &str) -> Result<Self, StoreError> {
        let malformed = |reason: String| StoreError::Malformed { line, reason };
        let mut fields = row.splitn(4, ',');
        let (Some(id), Some(due_at), Some(kind), Some(text)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(malformed("expected 4 fields".into()));
        };
        let id = id.trim().parse::<u64>().map_err(|e| malformed(format!("bad id: {e}")))?;
        let due_at = NaiveDateTime::parse_from_str(due_at.trim(), TIMESTAMP_FORMAT)
            .map_err(|e| malformed(format!("bad due time: {e}")))?;
        let kind = kind.trim().parse::<ReminderKind>().map_err(malformed)?;
        let text = parse_text(text).ok_or_else(|| malformed(format!("bad text: {text}")))?;
        Ok(Reminder { id, due_at, kind, text })
    }
}

/// Decodes the text field: a JSON string, a CSV-quoted field (`"say ""hi"", ok"`)
/// as older files were written, or bare text.
fn parse_text(field: &str) -> Option<String> {
    if !field.starts_with('"') {
        return Some(field.to_string());
    }
    if let Ok(text) = serde_json::from_str::<String>(field) {
        return Some(text);
    }
    let inner = field.strip_prefix('"')?.strip_suffix('"')?;
    if inner.replace("\"\"", "").contains('"') {
        return None;
    }
    Some(inner.replace("\"\"", "\""))
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("reminder file {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("reminder file line {line} is malformed: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("could not encode reminder text: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Flat-file list of pending reminders, one row per reminder.
///
/// Every mutation rewrites the whole file into a temp file and renames it over
/// the original, so a failed write never leaves a half-written store behind.
pub struct ReminderStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ReminderStore {
    /// Opens the store at `path`, creating an empty file if there is none.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .map_err(|source| StoreError::Io { path: path.clone(), source })?;
        Ok(Self { path, write_lock: Mutex::new(()) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_rows(&self) -> Result<Vec<Result<Reminder, StoreError>>, StoreError> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        Ok(content
            .lines()
            .enumerate()
            .filter(|(_, row)| !row.trim().is_empty())
            .map(|(i, row)| Reminder::from_row(i + 1, row))
            .collect())
    }

    /// Reads every reminder, failing on the first row that doesn't parse.
    pub fn try_load(&self) -> Result<Vec<Reminder>, StoreError> {
        self.read_rows()?.into_iter().collect()
    }

    /// Reads every reminder it can. Unparseable rows are logged and skipped,
    /// a store that can't be read counts as empty.
    pub fn load(&self) -> Vec<Reminder> {
        let rows = match self.read_rows() {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!("could not load reminders: {e}");
                return Vec::new();
            }
        };
        rows.into_iter()
            .filter_map(|row| {
                row.map_err(|e| tracing::warn!("skipping reminder row: {e}")).ok()
            })
            .collect()
    }

    /// Adds a reminder with id `max(existing) + 1`, or 0 for an empty store.
    ///
    /// The id is recomputed on every insert, so deleting the highest reminder
    /// frees its id for the next one.
    pub fn append(
        &self, due_at: NaiveDateTime, kind: ReminderKind, text: &str,
    ) -> Result<Reminder, StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut reminders = self.try_load()?;
        let id = reminders.iter().map(|r| r.id).max().map_or(0, |max| max + 1);
        let reminder = Reminder { id, due_at, kind, text: text.to_string() };
        reminders.push(reminder.clone());
        self.replace(&reminders)?;
        tracing::info!("Added reminder #{id} to be fired @ {}", due_at.format(TIMESTAMP_FORMAT));
        Ok(reminder)
    }

    /// Removes the reminder with `id`. Returns whether one was found.
    pub fn delete(&self, id: u64) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut reminders = self.try_load()?;
        let before = reminders.len();
        reminders.retain(|r| r.id != id);
        if reminders.len() == before {
            tracing::warn!("Tried to delete ID {id} but could not find matching entry.");
            return Ok(false);
        }
        self.replace(&reminders)?;
        tracing::info!("Deleted reminder with ID {id} from list");
        Ok(true)
    }

    pub fn delete_all(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        File::create(&self.path).map_err(|e| self.io_error(e))?;
        tracing::info!("Dismissed all reminders.");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    fn replace(&self, reminders: &[Reminder]) -> Result<(), StoreError> {
        let tmp = self.temp_path();
        let written = Self::write_rows(&tmp, reminders)
            .and_then(|()| fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e)));
        if written.is_err() {
            let _ = fs::remove_file(&tmp); // original stays untouched
        }
        written
    }

    fn write_rows(path: &Path, reminders: &[Reminder]) -> Result<(), StoreError> {
        let io_error = |source| StoreError::Io { path: path.to_path_buf(), source };
        let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
        for reminder in reminders {
            writeln!(writer, "{}", reminder.to_row()?).map_err(io_error)?;
        }
        writer.flush().map_err(io_error)?;
        writer.get_ref().sync_all().map_err(io_error)
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io { path: self.path.clone(), source }
    }
}
