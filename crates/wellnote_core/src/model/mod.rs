//! Domain model for journal notes and prompts.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep the persisted note shape and the ephemeral quote shape separate.
//!
//! # Invariants
//! - A `Note` is immutable after creation; it is removed, never edited.
//! - A `Quote` is never persisted directly; only the note it inspired is.

pub mod note;
pub mod quote;
