//! Platform preferences seam.
//!
//! # Responsibility
//! - Define the string-keyed get/set contract the core persists through.
//! - Provide an in-memory implementation for tests/ephemeral sessions and
//!   a SQLite-backed implementation for desktop/CLI hosts.
//!
//! # Invariants
//! - Values are opaque strings; serialization policy belongs to callers.
//! - The whole value under a key is the unit of persistence; there are no
//!   partial updates.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryPreferences;
pub use sqlite::SqlitePreferences;

pub type PrefsResult<T> = Result<T, PrefsError>;

/// Failure while reading or writing a persisted preference value.
#[derive(Debug)]
pub enum PrefsError {
    Db(DbError),
    Backend(String),
}

impl Display for PrefsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Backend(message) => write!(f, "preferences backend failure: {message}"),
        }
    }
}

impl Error for PrefsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Backend(_) => None,
        }
    }
}

impl From<DbError> for PrefsError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PrefsError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String-keyed persistence contract backing notes and reminder state.
///
/// Mirrors the host platform's preferences API: `get` returns `None` for an
/// absent key, `set` overwrites the whole value.
pub trait PreferencesStore {
    fn get(&self, key: &str) -> PrefsResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> PrefsResult<()>;
}
