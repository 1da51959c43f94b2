//! SQLite-backed preferences implementation.
//!
//! # Responsibility
//! - Persist preference keys in the migrated `prefs` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - The connection must come from `db::open_db`/`open_db_in_memory` so the
//!   schema is migrated before first use.

use super::{PreferencesStore, PrefsResult};
use rusqlite::{params, Connection, OptionalExtension};

/// `PreferencesStore` over a migrated SQLite connection.
pub struct SqlitePreferences<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePreferences<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PreferencesStore for SqlitePreferences<'_> {
    fn get(&self, key: &str) -> PrefsResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM prefs WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> PrefsResult<()> {
        self.conn.execute(
            "INSERT INTO prefs (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}
