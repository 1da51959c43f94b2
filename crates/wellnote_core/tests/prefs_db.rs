use wellnote_core::db::migrations::{apply_migrations, latest_version};
use wellnote_core::db::{open_db, open_db_in_memory, DbError};
use wellnote_core::{PreferencesStore, SqlitePreferences};

#[test]
fn fresh_db_reaches_latest_schema_version() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn reapplying_migrations_is_a_no_op() {
    let mut conn = open_db_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();
    apply_migrations(&mut conn).unwrap();
}

#[test]
fn db_from_newer_binary_is_rejected() {
    let mut conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    assert!(matches!(
        err,
        DbError::UnsupportedSchemaVersion {
            db_version: 999,
            ..
        }
    ));
}

#[test]
fn sqlite_prefs_get_set_overwrite() {
    let conn = open_db_in_memory().unwrap();
    let prefs = SqlitePreferences::new(&conn);

    assert_eq!(prefs.get("reminder.time").unwrap(), None);

    prefs.set("reminder.time", "07:30").unwrap();
    assert_eq!(
        prefs.get("reminder.time").unwrap().as_deref(),
        Some("07:30")
    );

    prefs.set("reminder.time", "21:45").unwrap();
    assert_eq!(
        prefs.get("reminder.time").unwrap().as_deref(),
        Some("21:45")
    );
}

#[test]
fn file_backed_prefs_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("wellnote.sqlite3");

    {
        let conn = open_db(&db_path).unwrap();
        let prefs = SqlitePreferences::new(&conn);
        prefs.set("notes", "[]").unwrap();
        prefs.set("reminder.enabled", "true").unwrap();
    }

    let conn = open_db(&db_path).unwrap();
    let prefs = SqlitePreferences::new(&conn);
    assert_eq!(prefs.get("notes").unwrap().as_deref(), Some("[]"));
    assert_eq!(
        prefs.get("reminder.enabled").unwrap().as_deref(),
        Some("true")
    );
}
