//! Core domain logic for Wellnote.
//! This crate is the single source of truth for prompt, note and reminder
//! invariants; UI hosts reach it through the FFI crate.

pub mod db;
pub mod logging;
pub mod model;
pub mod prefs;
pub mod quote;
pub mod reminder;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NO_PROMPT_SENTINEL};
pub use model::quote::Quote;
pub use prefs::{MemoryPreferences, PreferencesStore, PrefsError, SqlitePreferences};
pub use quote::cache::{PromptCache, PromptOrigin, PromptOutcome};
pub use quote::fallback::{fallback_prompts, DEFAULT_REFLECTION};
pub use quote::source::{HttpQuoteSource, QuoteFetchError, QuoteSource, QUOTES_ENDPOINT};
pub use reminder::{
    parse_hour_minute, NotificationGateway, NotifyError, PermissionStatus, ReloadOutcome,
    ReminderError, ReminderScheduler, TestFireOutcome, ToggleOutcome, DAILY_REMINDER_ID,
    DEFAULT_REMINDER_TIME, REMINDER_ENABLED_KEY, REMINDER_TIME_KEY, TEST_NOTIFICATION_ID,
};
pub use repo::note_store::{NoteStore, NoteStoreError, NOTES_KEY};
pub use service::journal_service::{JournalError, JournalService, StartupSummary};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
