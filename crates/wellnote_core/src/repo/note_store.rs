//! Note list persistence over a preferences store.
//!
//! # Responsibility
//! - Load, append and remove journal notes under the single notes key.
//! - Own the in-memory list and keep it newest-first.
//!
//! # Invariants
//! - Insertion order is reverse-chronological (index 0 is newest).
//! - A note id is never reused within the same list; collisions with the
//!   current head bump the new id past it.
//! - Malformed persisted JSON fails the load; there is no silent reset.

use crate::model::note::Note;
use crate::prefs::{PreferencesStore, PrefsError};
use chrono::{Local, Utc};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Preferences key holding the serialized note list.
pub const NOTES_KEY: &str = "notes";

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub type NoteStoreResult<T> = Result<T, NoteStoreError>;

#[derive(Debug)]
pub enum NoteStoreError {
    Prefs(PrefsError),
    /// Persisted notes value is not a valid JSON note list.
    Malformed(serde_json::Error),
}

impl Display for NoteStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prefs(err) => write!(f, "{err}"),
            Self::Malformed(err) => write!(f, "malformed persisted notes: {err}"),
        }
    }
}

impl Error for NoteStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Prefs(err) => Some(err),
            Self::Malformed(err) => Some(err),
        }
    }
}

impl From<PrefsError> for NoteStoreError {
    fn from(value: PrefsError) -> Self {
        Self::Prefs(value)
    }
}

/// Ordered journal note list persisted as one value under [`NOTES_KEY`].
pub struct NoteStore<'p, P: PreferencesStore> {
    prefs: &'p P,
    notes: Vec<Note>,
}

impl<'p, P: PreferencesStore> NoteStore<'p, P> {
    /// Creates an empty store; call [`NoteStore::load_all`] to hydrate it.
    pub fn new(prefs: &'p P) -> Self {
        Self {
            prefs,
            notes: Vec::new(),
        }
    }

    /// Reads the persisted list, replacing the in-memory one.
    ///
    /// An absent key yields an empty list. A present but unparsable value is
    /// an error for this call.
    pub fn load_all(&mut self) -> NoteStoreResult<&[Note]> {
        self.notes = match self.prefs.get(NOTES_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(NoteStoreError::Malformed)?,
            None => Vec::new(),
        };
        info!(
            "event=notes_load module=notes status=ok count={}",
            self.notes.len()
        );
        Ok(&self.notes)
    }

    /// Current in-memory list, newest-first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Appends a note at the head and persists the whole list.
    ///
    /// # Contract
    /// - Whitespace-only `text` is a silent no-op returning `None`; nothing
    ///   is persisted.
    /// - Returns the constructed note on success.
    pub fn append(
        &mut self,
        text: &str,
        prompt: Option<&str>,
        author: Option<&str>,
    ) -> NoteStoreResult<Option<Note>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let note = Note::new(
            self.next_id(),
            trimmed,
            Local::now().format(DATE_FORMAT).to_string(),
            prompt,
            author,
        );
        self.notes.insert(0, note.clone());
        self.persist()?;

        info!("event=note_append module=notes status=ok id={}", note.id);
        Ok(Some(note))
    }

    /// Removes the note with `id` and persists the filtered list.
    ///
    /// Trivially succeeds when the id is absent.
    pub fn remove(&mut self, id: i64) -> NoteStoreResult<()> {
        self.notes.retain(|note| note.id != id);
        self.persist()?;
        info!("event=note_remove module=notes status=ok id={id}");
        Ok(())
    }

    // Ids are epoch millis; the head holds the largest id, so two appends
    // inside one millisecond still get distinct ids.
    fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        match self.notes.first() {
            Some(head) if head.id >= now => head.id + 1,
            _ => now,
        }
    }

    fn persist(&self) -> NoteStoreResult<()> {
        let raw = serde_json::to_string(&self.notes).map_err(NoteStoreError::Malformed)?;
        self.prefs.set(NOTES_KEY, &raw)?;
        Ok(())
    }
}
