//! Built-in fallback prompts.
//!
//! Served when the remote source is unreachable or returns nothing usable,
//! so the user is never left without a prompt.

use crate::model::quote::Quote;

/// Shown when a picked entry turns out to have blank text.
pub const DEFAULT_REFLECTION: &str = "Take a deep breath and reflect for a minute.";

const FALLBACK_AUTHOR: &str = "Wellness Prompt";

const FALLBACK_TEXTS: [&str; 5] = [
    "Take a deep breath. What is one small thing you can do today for yourself?",
    "Name three things you are grateful for right now.",
    "What is one thought you can reframe more kindly?",
    "Write a short message to your future self in one month.",
    "What boundary do you want to practice this week?",
];

/// Returns the fixed offline prompt list.
pub fn fallback_prompts() -> Vec<Quote> {
    FALLBACK_TEXTS
        .iter()
        .map(|text| Quote::new(*text, Some(FALLBACK_AUTHOR)))
        .collect()
}
