//! Quote domain model.
//!
//! # Responsibility
//! - Define the in-memory shape of a reflective prompt quote.
//!
//! # Invariants
//! - Quotes exist only in memory (fetched or built-in fallback).
//! - A quote is usable only when its trimmed text is non-empty.

use serde::{Deserialize, Serialize};

/// A short reflective text shown to the user before journaling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    #[serde(default)]
    pub author: Option<String>,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: Option<&str>) -> Self {
        Self {
            text: text.into(),
            author: author.map(str::to_string),
        }
    }

    /// Returns whether this quote can be displayed as a prompt.
    pub fn is_usable(&self) -> bool {
        !self.text.trim().is_empty()
    }
}
