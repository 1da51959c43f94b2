//! Journal note domain model.
//!
//! # Responsibility
//! - Define the persisted note record and its construction rules.
//!
//! # Invariants
//! - `id` is creation-timestamp-derived and never reused within one list.
//! - `prompt` always carries either the prompt shown at write time or the
//!   `(no prompt)` sentinel, never an empty string.
//! - A blank `author` collapses to `None` instead of an empty value.

use serde::{Deserialize, Serialize};

/// Prompt text recorded when a note is written without a displayed prompt.
pub const NO_PROMPT_SENTINEL: &str = "(no prompt)";

/// A persisted journal entry tied to the prompt shown when it was written.
///
/// Serialized as one element of the JSON array stored under the notes key,
/// matching the host app's historical wire shape (optional `author` is
/// omitted entirely when absent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Epoch milliseconds at creation. Unique within one device's list by
    /// construction, not globally.
    pub id: i64,
    /// Trimmed, non-empty body text.
    pub text: String,
    /// Human-readable local timestamp captured at creation.
    pub date: String,
    /// Prompt text shown when the note was written, or the sentinel.
    pub prompt: String,
    /// Author of the prompt, when the prompt had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Note {
    /// Builds a note, applying the prompt sentinel and author normalization.
    pub fn new(
        id: i64,
        text: impl Into<String>,
        date: impl Into<String>,
        prompt: Option<&str>,
        author: Option<&str>,
    ) -> Self {
        let prompt = match prompt {
            Some(value) if !value.trim().is_empty() => value.to_string(),
            _ => NO_PROMPT_SENTINEL.to_string(),
        };
        let author = author
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        Self {
            id,
            text: text.into(),
            date: date.into(),
            prompt,
            author,
        }
    }
}
