//! Journal use-case service (composition root).
//!
//! # Responsibility
//! - Wire the quote source, prompt cache, note store and reminder scheduler
//!   behind session-level operations.
//! - Remember the currently displayed prompt so saved notes carry it.
//!
//! # Invariants
//! - UI feedback derives from returned outcome tags; the service performs
//!   no presentation side effects itself.
//! - A save without a displayed prompt records the `(no prompt)` sentinel.

use crate::model::note::Note;
use crate::model::quote::Quote;
use crate::prefs::PreferencesStore;
use crate::quote::cache::{PromptCache, PromptOutcome};
use crate::quote::source::QuoteSource;
use crate::reminder::scheduler::{
    ReloadOutcome, ReminderScheduler, TestFireOutcome, ToggleOutcome,
};
use crate::reminder::{NotificationGateway, ReminderError};
use crate::repo::note_store::{NoteStore, NoteStoreError};
use log::info;
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type JournalResult<T> = Result<T, JournalError>;

#[derive(Debug)]
pub enum JournalError {
    Notes(NoteStoreError),
    Reminder(ReminderError),
}

impl Display for JournalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Notes(err) => write!(f, "{err}"),
            Self::Reminder(err) => write!(f, "{err}"),
        }
    }
}

impl Error for JournalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Notes(err) => Some(err),
            Self::Reminder(err) => Some(err),
        }
    }
}

impl From<NoteStoreError> for JournalError {
    fn from(value: NoteStoreError) -> Self {
        Self::Notes(value)
    }
}

impl From<ReminderError> for JournalError {
    fn from(value: ReminderError) -> Self {
        Self::Reminder(value)
    }
}

/// What `startup` restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupSummary {
    pub note_count: usize,
    pub reminder: ReloadOutcome,
}

/// Session-level journal orchestration over platform seams.
///
/// The caller owns the platform implementations (quote source, preferences
/// store, notification gateway) and the service borrows them for the
/// session, mirroring how repositories borrow their connection.
pub struct JournalService<'a, S, P, N>
where
    S: QuoteSource,
    P: PreferencesStore,
    N: NotificationGateway,
{
    source: &'a S,
    cache: PromptCache,
    notes: NoteStore<'a, P>,
    reminder: ReminderScheduler<'a, P, N>,
    current_prompt: Option<Quote>,
}

impl<'a, S, P, N> JournalService<'a, S, P, N>
where
    S: QuoteSource,
    P: PreferencesStore,
    N: NotificationGateway,
{
    pub fn new(source: &'a S, prefs: &'a P, gateway: &'a N) -> Self {
        Self {
            source,
            cache: PromptCache::new(),
            notes: NoteStore::new(prefs),
            reminder: ReminderScheduler::new(prefs, gateway),
            current_prompt: None,
        }
    }

    /// Restores persisted state: note list, reminder prefs, and the
    /// reminder arm when it was previously enabled and still permitted.
    pub fn startup(&mut self) -> JournalResult<StartupSummary> {
        let note_count = self.notes.load_all()?.len();
        let reminder = self.reminder.reload_on_startup()?;
        info!(
            "event=journal_startup module=service status=ok notes={note_count} reminder={reminder:?}"
        );
        Ok(StartupSummary {
            note_count,
            reminder,
        })
    }

    /// Produces the displayed prompt and remembers it for subsequent saves.
    pub fn prompt<R: Rng>(&mut self, rng: &mut R) -> PromptOutcome {
        let outcome = self.cache.prompt(self.source, rng);
        self.current_prompt = Some(outcome.quote.clone());
        outcome
    }

    /// Currently displayed prompt, if one was produced this session.
    pub fn current_prompt(&self) -> Option<&Quote> {
        self.current_prompt.as_ref()
    }

    /// Saves a note attached to the currently displayed prompt.
    ///
    /// Returns `None` without persisting when `text` trims to empty.
    pub fn save_note(&mut self, text: &str) -> JournalResult<Option<Note>> {
        let (prompt, author) = match &self.current_prompt {
            Some(quote) => (Some(quote.text.as_str()), quote.author.as_deref()),
            None => (None, None),
        };
        Ok(self.notes.append(text, prompt, author)?)
    }

    /// Deletes a note by id; trivially succeeds when absent.
    pub fn delete_note(&mut self, id: i64) -> JournalResult<()> {
        Ok(self.notes.remove(id)?)
    }

    /// Note history, newest-first.
    pub fn notes(&self) -> &[Note] {
        self.notes.notes()
    }

    pub fn reminder_enabled(&self) -> bool {
        self.reminder.is_enabled()
    }

    pub fn reminder_time(&self) -> &str {
        self.reminder.time()
    }

    pub fn set_reminder_time(&mut self, time: impl Into<String>) {
        self.reminder.set_time(time);
    }

    pub fn toggle_reminder(&mut self, requested_on: bool) -> JournalResult<ToggleOutcome> {
        Ok(self.reminder.toggle(requested_on)?)
    }

    pub fn fire_test_notification(&self) -> JournalResult<TestFireOutcome> {
        Ok(self.reminder.fire_test_notification()?)
    }
}
