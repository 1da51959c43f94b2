use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use wellnote_core::db::open_db_in_memory;
use wellnote_core::quote::source::FetchResult;
use wellnote_core::{
    JournalService, MemoryPreferences, NotificationGateway, NotifyError, PermissionStatus,
    PreferencesStore, PromptOrigin, Quote, QuoteSource, ReloadOutcome, SqlitePreferences,
    ToggleOutcome, NO_PROMPT_SENTINEL, REMINDER_ENABLED_KEY, REMINDER_TIME_KEY,
};

struct SingleQuoteSource;

impl QuoteSource for SingleQuoteSource {
    fn fetch_quotes(&self) -> FetchResult {
        Ok(vec![Quote::new("Name one good thing.", Some("Rumi"))])
    }
}

struct GrantingGateway {
    daily_schedules: RefCell<Vec<(u32, u32, u32)>>,
}

impl GrantingGateway {
    fn new() -> Self {
        Self {
            daily_schedules: RefCell::new(Vec::new()),
        }
    }
}

impl NotificationGateway for GrantingGateway {
    fn request_permission(&self) -> Result<PermissionStatus, NotifyError> {
        Ok(PermissionStatus::Granted)
    }

    fn check_permission(&self) -> Result<PermissionStatus, NotifyError> {
        Ok(PermissionStatus::Granted)
    }

    fn schedule_daily(
        &self,
        id: u32,
        _title: &str,
        _body: &str,
        hour: u32,
        minute: u32,
    ) -> Result<(), NotifyError> {
        self.daily_schedules.borrow_mut().push((id, hour, minute));
        Ok(())
    }

    fn schedule_at(
        &self,
        _id: u32,
        _title: &str,
        _body: &str,
        _fire_at_epoch_ms: i64,
    ) -> Result<(), NotifyError> {
        Ok(())
    }

    fn cancel(&self, _id: u32) -> Result<(), NotifyError> {
        Ok(())
    }
}

#[test]
fn startup_on_empty_storage_yields_clean_state() {
    let source = SingleQuoteSource;
    let prefs = MemoryPreferences::new();
    let gateway = GrantingGateway::new();
    let mut journal = JournalService::new(&source, &prefs, &gateway);

    let summary = journal.startup().unwrap();

    assert_eq!(summary.note_count, 0);
    assert_eq!(summary.reminder, ReloadOutcome::Disabled);
    assert!(journal.current_prompt().is_none());
}

#[test]
fn saved_note_carries_the_displayed_prompt() {
    let source = SingleQuoteSource;
    let prefs = MemoryPreferences::new();
    let gateway = GrantingGateway::new();
    let mut journal = JournalService::new(&source, &prefs, &gateway);
    journal.startup().unwrap();
    let mut rng = StdRng::seed_from_u64(11);

    let outcome = journal.prompt(&mut rng);
    assert_eq!(outcome.origin, PromptOrigin::Live);
    assert_eq!(outcome.quote.text, "Name one good thing.");

    let note = journal
        .save_note("Feeling okay today")
        .unwrap()
        .expect("non-empty text should save");
    assert_eq!(note.prompt, "Name one good thing.");
    assert_eq!(note.author.as_deref(), Some("Rumi"));

    // A fresh session sees the persisted note with its prompt attribution.
    let mut next_session = JournalService::new(&source, &prefs, &gateway);
    let summary = next_session.startup().unwrap();
    assert_eq!(summary.note_count, 1);
    assert_eq!(next_session.notes()[0].text, "Feeling okay today");
    assert_eq!(next_session.notes()[0].prompt, "Name one good thing.");
}

#[test]
fn saving_before_any_prompt_records_the_sentinel() {
    let source = SingleQuoteSource;
    let prefs = MemoryPreferences::new();
    let gateway = GrantingGateway::new();
    let mut journal = JournalService::new(&source, &prefs, &gateway);
    journal.startup().unwrap();

    let note = journal.save_note("quick thought").unwrap().unwrap();

    assert_eq!(note.prompt, NO_PROMPT_SENTINEL);
    assert_eq!(note.author, None);
}

#[test]
fn whitespace_save_is_rejected_silently_through_the_service() {
    let source = SingleQuoteSource;
    let prefs = MemoryPreferences::new();
    let gateway = GrantingGateway::new();
    let mut journal = JournalService::new(&source, &prefs, &gateway);
    journal.startup().unwrap();

    assert!(journal.save_note("   ").unwrap().is_none());
    assert!(journal.notes().is_empty());
}

#[test]
fn delete_removes_only_the_matching_note() {
    let source = SingleQuoteSource;
    let prefs = MemoryPreferences::new();
    let gateway = GrantingGateway::new();
    let mut journal = JournalService::new(&source, &prefs, &gateway);
    journal.startup().unwrap();

    let first = journal.save_note("first").unwrap().unwrap();
    let second = journal.save_note("second").unwrap().unwrap();

    journal.delete_note(first.id).unwrap();

    assert_eq!(journal.notes().len(), 1);
    assert_eq!(journal.notes()[0].id, second.id);
}

#[test]
fn startup_rearms_a_previously_enabled_reminder() {
    let source = SingleQuoteSource;
    let prefs = MemoryPreferences::new();
    prefs.set(REMINDER_ENABLED_KEY, "true").unwrap();
    prefs.set(REMINDER_TIME_KEY, "08:05").unwrap();
    let gateway = GrantingGateway::new();
    let mut journal = JournalService::new(&source, &prefs, &gateway);

    let summary = journal.startup().unwrap();

    assert_eq!(summary.reminder, ReloadOutcome::Rearmed);
    assert!(journal.reminder_enabled());
    assert_eq!(journal.reminder_time(), "08:05");
    assert_eq!(
        *gateway.daily_schedules.borrow(),
        vec![(wellnote_core::DAILY_REMINDER_ID, 8, 5)]
    );
}

#[test]
fn full_session_works_over_sqlite_preferences() {
    let source = SingleQuoteSource;
    let conn = open_db_in_memory().unwrap();
    let prefs = SqlitePreferences::new(&conn);
    let gateway = GrantingGateway::new();
    let mut journal = JournalService::new(&source, &prefs, &gateway);
    journal.startup().unwrap();
    let mut rng = StdRng::seed_from_u64(5);

    journal.prompt(&mut rng);
    journal.save_note("persisted through sqlite").unwrap();
    journal.set_reminder_time("07:30");
    let toggled = journal.toggle_reminder(true).unwrap();
    assert_eq!(toggled, ToggleOutcome::Enabled);

    let mut next_session = JournalService::new(&source, &prefs, &gateway);
    let summary = next_session.startup().unwrap();
    assert_eq!(summary.note_count, 1);
    assert_eq!(summary.reminder, ReloadOutcome::Rearmed);
    assert_eq!(next_session.reminder_time(), "07:30");
}
