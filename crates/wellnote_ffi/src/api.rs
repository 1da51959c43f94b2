//! FFI use-case API for host-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the mobile host via FRB.
//! - Map core outcome tags to the short notices the host surfaces.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Reminder scheduling itself stays on the host (native notification
//!   APIs); this layer persists reminder prefs and parses the time so the
//!   host can arm its scheduler.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use wellnote_core::db::open_db;
use wellnote_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, parse_hour_minute,
    ping as ping_inner, HttpQuoteSource, NoteStore, PromptCache, PromptOrigin, PromptOutcome,
    SqlitePreferences, DEFAULT_REMINDER_TIME, PreferencesStore, REMINDER_ENABLED_KEY,
    REMINDER_TIME_KEY,
};

const JOURNAL_DB_FILE_NAME: &str = "wellnote_journal.sqlite3";
static JOURNAL_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static PROMPT_CACHE: OnceLock<Mutex<PromptCache>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for the same `level + log_dir`; conflicts return an error.
/// - Never panics; returns empty string on success, error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Journal note mirrored to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalNoteView {
    pub id: i64,
    pub text: String,
    pub date: String,
    pub prompt: String,
    pub author: Option<String>,
}

/// Prompt produced for display, with the origin tag and the short notice
/// the host shows when the prompt did not come from the live source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptResponse {
    pub ok: bool,
    pub text: String,
    pub author: Option<String>,
    /// One of `live|fallback_empty_api|fallback_offline|cache`.
    pub origin: String,
    pub notice: Option<String>,
}

/// Generic action envelope for journal mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalActionResponse {
    pub ok: bool,
    pub note: Option<JournalNoteView>,
    pub message: String,
}

impl JournalActionResponse {
    fn success(message: impl Into<String>, note: Option<JournalNoteView>) -> Self {
        Self {
            ok: true,
            note,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            note: None,
            message: message.into(),
        }
    }
}

/// Note history envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesResponse {
    pub ok: bool,
    pub notes: Vec<JournalNoteView>,
    pub message: String,
}

/// Reminder preference snapshot with the parsed schedule time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderPrefsResponse {
    pub ok: bool,
    pub enabled: bool,
    /// Raw stored `HH:MM` string (default when absent).
    pub time: String,
    pub hour: u32,
    pub minute: u32,
    pub message: String,
}

/// Returns a prompt for display, fetching the quote list at most once per
/// process and falling back to the built-in list when offline.
///
/// # FFI contract
/// - Sync call; may block on one HTTP request on the first invocation.
/// - Never panics; degraded paths still return a usable prompt.
#[flutter_rust_bridge::frb(sync)]
pub fn get_prompt() -> PromptResponse {
    let source = match HttpQuoteSource::new() {
        Ok(source) => source,
        Err(err) => {
            return PromptResponse {
                ok: false,
                text: String::new(),
                author: None,
                origin: String::new(),
                notice: Some(format!("prompt source init failed: {err}")),
            };
        }
    };

    let cache = PROMPT_CACHE.get_or_init(|| Mutex::new(PromptCache::new()));
    let outcome = match cache.lock() {
        Ok(mut guard) => guard.prompt(&source, &mut rand::thread_rng()),
        Err(_) => {
            return PromptResponse {
                ok: false,
                text: String::new(),
                author: None,
                origin: String::new(),
                notice: Some("prompt cache poisoned".to_string()),
            };
        }
    };

    to_prompt_response(outcome)
}

/// Loads the persisted note history, newest-first.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; malformed storage reports a failure envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn load_notes() -> NotesResponse {
    let result = with_prefs(|prefs| {
        let mut store = NoteStore::new(prefs);
        store.load_all().map_err(|err| err.to_string())?;
        Ok(store.notes().iter().map(to_note_view).collect::<Vec<_>>())
    });
    match result {
        Ok(notes) => {
            let message = format!("Loaded {} note(s).", notes.len());
            NotesResponse {
                ok: true,
                notes,
                message,
            }
        }
        Err(err) => {
            log::warn!("event=ffi_load_notes module=ffi status=error error={err}");
            NotesResponse {
                ok: false,
                notes: Vec::new(),
                message: format!("load_notes failed: {err}"),
            }
        }
    }
}

/// Appends a journal note tied to the displayed prompt.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Whitespace-only text is a silent no-op (`ok=true`, no note).
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn save_note(
    text: String,
    prompt: Option<String>,
    author: Option<String>,
) -> JournalActionResponse {
    let result = with_prefs(|prefs| {
        let mut store = NoteStore::new(prefs);
        store.load_all().map_err(|err| err.to_string())?;
        store
            .append(&text, prompt.as_deref(), author.as_deref())
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(Some(note)) => JournalActionResponse::success("Saved", Some(to_note_view(&note))),
        Ok(None) => JournalActionResponse::success("Nothing to save.", None),
        Err(err) => {
            log::warn!("event=ffi_save_note module=ffi status=error error={err}");
            JournalActionResponse::failure(format!("save_note failed: {err}"))
        }
    }
}

/// Deletes a note by id; absent ids succeed trivially.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_note(id: i64) -> JournalActionResponse {
    let result = with_prefs(|prefs| {
        let mut store = NoteStore::new(prefs);
        store.load_all().map_err(|err| err.to_string())?;
        store.remove(id).map_err(|err| err.to_string())
    });
    match result {
        Ok(()) => JournalActionResponse::success("Deleted", None),
        Err(err) => JournalActionResponse::failure(format!("delete_note failed: {err}")),
    }
}

/// Reads persisted reminder prefs with the parsed hour/minute the host
/// feeds to its native scheduler.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; absent keys yield the disabled default state.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_prefs() -> ReminderPrefsResponse {
    let result = with_prefs(|prefs| {
        let enabled = match prefs
            .get(REMINDER_ENABLED_KEY)
            .map_err(|err| err.to_string())?
        {
            // The flag is a JSON boolean on the wire; a malformed value is
            // an error for this call, not a silent `false`.
            Some(raw) => serde_json::from_str::<bool>(&raw)
                .map_err(|err| format!("malformed persisted reminder flag: {err}"))?,
            None => false,
        };
        let time = prefs
            .get(REMINDER_TIME_KEY)
            .map_err(|err| err.to_string())?
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_REMINDER_TIME.to_string());
        Ok((enabled, time))
    });
    match result {
        Ok((enabled, time)) => {
            let (hour, minute) = parse_hour_minute(&time);
            ReminderPrefsResponse {
                ok: true,
                enabled,
                time,
                hour,
                minute,
                message: String::new(),
            }
        }
        Err(err) => {
            let (hour, minute) = parse_hour_minute(DEFAULT_REMINDER_TIME);
            ReminderPrefsResponse {
                ok: false,
                enabled: false,
                time: DEFAULT_REMINDER_TIME.to_string(),
                hour,
                minute,
                message: format!("reminder_prefs failed: {err}"),
            }
        }
    }
}

/// Persists reminder prefs after the host armed or cancelled its native
/// scheduler.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn set_reminder_prefs(enabled: bool, time: String) -> JournalActionResponse {
    let result = with_prefs(|prefs| {
        prefs
            .set(REMINDER_ENABLED_KEY, if enabled { "true" } else { "false" })
            .map_err(|err| err.to_string())?;
        prefs
            .set(REMINDER_TIME_KEY, &time)
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(()) => JournalActionResponse::success("Reminder prefs saved.", None),
        Err(err) => JournalActionResponse::failure(format!("set_reminder_prefs failed: {err}")),
    }
}

fn to_prompt_response(outcome: PromptOutcome) -> PromptResponse {
    let notice = match outcome.origin {
        PromptOrigin::FallbackEmptyApi => {
            Some("Using built-in prompts (API empty).".to_string())
        }
        PromptOrigin::FallbackOffline => {
            Some("Offline mode: using built-in prompts.".to_string())
        }
        PromptOrigin::Live | PromptOrigin::Cache => None,
    };
    PromptResponse {
        ok: true,
        text: outcome.quote.text,
        author: outcome.quote.author,
        origin: outcome.origin.as_str().to_string(),
        notice,
    }
}

fn to_note_view(note: &wellnote_core::Note) -> JournalNoteView {
    JournalNoteView {
        id: note.id,
        text: note.text.clone(),
        date: note.date.clone(),
        prompt: note.prompt.clone(),
        author: note.author.clone(),
    }
}

fn resolve_journal_db_path() -> PathBuf {
    JOURNAL_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("WELLNOTE_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(JOURNAL_DB_FILE_NAME)
        })
        .clone()
}

fn with_prefs<T>(
    f: impl FnOnce(&SqlitePreferences<'_>) -> Result<T, String>,
) -> Result<T, String> {
    let db_path = resolve_journal_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("journal DB open failed: {err}"))?;
    let prefs = SqlitePreferences::new(&conn);
    f(&prefs)
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, delete_note, init_logging, ping, reminder_prefs, save_note,
        set_reminder_prefs, with_prefs, REMINDER_ENABLED_KEY,
    };
    use std::sync::Mutex;
    use wellnote_core::PreferencesStore;

    // Reminder tests share the process-wide journal DB and the same key.
    static REMINDER_KEY_GUARD: Mutex<()> = Mutex::new(());

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn save_delete_round_trip_through_journal_db() {
        let saved = save_note(
            "ffi smoke note".to_string(),
            Some("Breathe".to_string()),
            None,
        );
        assert!(saved.ok, "{}", saved.message);
        let note = saved.note.expect("non-empty text should save");
        assert_eq!(note.prompt, "Breathe");

        let deleted = delete_note(note.id);
        assert!(deleted.ok, "{}", deleted.message);
    }

    #[test]
    fn whitespace_save_returns_no_note() {
        let saved = save_note("   ".to_string(), None, None);
        assert!(saved.ok);
        assert!(saved.note.is_none());
    }

    #[test]
    fn reminder_prefs_round_trip() {
        let _guard = REMINDER_KEY_GUARD
            .lock()
            .unwrap_or_else(|err| err.into_inner());

        let set = set_reminder_prefs(true, "07:30".to_string());
        assert!(set.ok, "{}", set.message);

        let prefs = reminder_prefs();
        assert!(prefs.ok, "{}", prefs.message);
        assert!(prefs.enabled);
        assert_eq!(prefs.time, "07:30");
        assert_eq!((prefs.hour, prefs.minute), (7, 30));
    }

    #[test]
    fn reminder_prefs_reports_malformed_stored_flag() {
        let _guard = REMINDER_KEY_GUARD
            .lock()
            .unwrap_or_else(|err| err.into_inner());

        let seeded = with_prefs(|prefs| {
            prefs
                .set(REMINDER_ENABLED_KEY, "not-json")
                .map_err(|err| err.to_string())
        });
        assert!(seeded.is_ok(), "{seeded:?}");

        let prefs = reminder_prefs();
        assert!(!prefs.ok);
        assert!(!prefs.enabled);
        assert!(prefs.message.contains("malformed"), "{}", prefs.message);

        // Put the stored flag back in a valid state for the shared DB.
        let restored = set_reminder_prefs(false, "20:00".to_string());
        assert!(restored.ok, "{}", restored.message);
    }
}
