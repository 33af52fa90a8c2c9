//! Reminder store trait and SQLite-backed implementation.
//!
//! # Invariants
//! - `insert` replaces any existing row with the same id.
//! - Rows are returned in no particular order.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::reminder::Reminder;
use log::{debug, error};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard};

const REMINDER_SELECT_SQL: &str = "SELECT
    entry_id,
    title,
    description,
    location,
    latitude,
    longitude
FROM reminders";

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage fault raised by a local store operation.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    LockPoisoned,
    /// The background task running the operation panicked or was cancelled.
    TaskJoin(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted reminder data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it with db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::LockPoisoned => write!(f, "reminder store lock poisoned"),
            Self::TaskJoin(message) => write!(f, "store task failed: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable reminder storage keyed by id.
pub trait ReminderStore: Send + Sync {
    /// Adds the record, replacing any stored record with the same id.
    fn insert(&self, reminder: &Reminder) -> StoreResult<()>;
    /// Returns every stored record.
    fn list_all(&self) -> StoreResult<Vec<Reminder>>;
    /// Returns the record with the given id, if any.
    fn find_by_id(&self, id: &str) -> StoreResult<Option<Reminder>>;
    /// Removes every record.
    fn delete_all(&self) -> StoreResult<()>;
}

/// SQLite-backed reminder store.
///
/// Owns its connection behind a mutex so the store can be shared with
/// background tasks; each operation holds the lock for one statement only.
pub struct SqliteReminderStore {
    conn: Mutex<Connection>,
}

impl SqliteReminderStore {
    /// Wraps a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the schema version is not current.
    /// - `MissingRequiredTable` when the `reminders` table is absent.
    pub fn try_new(conn: Connection) -> StoreResult<Self> {
        ensure_connection_ready(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| {
            error!("event=store_lock module=store status=error error_code=lock_poisoned");
            StoreError::LockPoisoned
        })
    }
}

impl ReminderStore for SqliteReminderStore {
    fn insert(&self, reminder: &Reminder) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO reminders (
                entry_id,
                title,
                description,
                location,
                latitude,
                longitude
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                reminder.id.as_str(),
                reminder.title.as_deref(),
                reminder.description.as_deref(),
                reminder.location.as_deref(),
                reminder.latitude,
                reminder.longitude,
            ],
        )?;
        debug!("event=store_insert module=store status=ok");
        Ok(())
    }

    fn list_all(&self) -> StoreResult<Vec<Reminder>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{REMINDER_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut reminders = Vec::new();
        while let Some(row) = rows.next()? {
            reminders.push(parse_reminder_row(row)?);
        }
        debug!(
            "event=store_list module=store status=ok count={}",
            reminders.len()
        );
        Ok(reminders)
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Option<Reminder>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{REMINDER_SELECT_SQL} WHERE entry_id = ?1;"))?;
        let found = stmt
            .query_row([id], |row| Ok(parse_reminder_row(row)))
            .optional()?;
        found.transpose()
    }

    fn delete_all(&self) -> StoreResult<()> {
        let conn = self.lock()?;
        let removed = conn.execute("DELETE FROM reminders;", [])?;
        debug!("event=store_delete_all module=store status=ok removed={removed}");
        Ok(())
    }
}

fn parse_reminder_row(row: &Row<'_>) -> StoreResult<Reminder> {
    let id: String = row.get("entry_id")?;
    if id.is_empty() {
        return Err(StoreError::InvalidData(
            "empty id in reminders.entry_id".to_string(),
        ));
    }

    Ok(Reminder {
        id,
        title: row.get("title")?,
        description: row.get("description")?,
        location: row.get("location")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
    })
}

fn ensure_connection_ready(conn: &Connection) -> StoreResult<()> {
    let expected_version = latest_version();
    let actual_version = current_user_version(conn)?;
    if actual_version != expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = 'reminders'
        );",
        [],
        |row| row.get(0),
    )?;
    if exists == 0 {
        return Err(StoreError::MissingRequiredTable("reminders"));
    }

    Ok(())
}
