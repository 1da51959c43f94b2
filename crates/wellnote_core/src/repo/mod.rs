//! Persistence layer over the preferences seam.
//!
//! # Responsibility
//! - Map the in-memory note list to its single persisted key.
//!
//! # Invariants
//! - The full note list is the unit of persistence; every append or remove
//!   rewrites the whole serialized value.

pub mod note_store;
