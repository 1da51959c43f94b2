//! Prompt retrieval, caching and fallback.
//!
//! # Responsibility
//! - Wrap the remote quote endpoint behind a single-attempt source contract.
//! - Hold the session-lifetime prompt cache with its static fallback list.
//!
//! # Invariants
//! - Fetch failure is a recoverable outcome, never an unhandled propagation.
//! - Once populated, the cache serves random picks without re-fetching for
//!   the remainder of the process lifetime.

pub mod cache;
pub mod fallback;
pub mod source;
