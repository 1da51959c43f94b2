//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate prompt, note and reminder components into use-case APIs.
//! - Keep UI/FFI layers decoupled from component wiring.

pub mod journal_service;
