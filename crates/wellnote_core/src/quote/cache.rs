//! Session-lifetime prompt cache.
//!
//! # Responsibility
//! - Fetch the quote list at most once per process and hold it in memory.
//! - Serve uniformly random picks with an explicit origin tag per call.
//!
//! # Invariants
//! - State moves EMPTY -> POPULATED exactly once and never back.
//! - Every populated entry path (live, fallback) immediately yields a pick.
//! - A blank picked entry is substituted by the default reflection text.

use crate::model::quote::Quote;
use crate::quote::fallback::{fallback_prompts, DEFAULT_REFLECTION};
use crate::quote::source::QuoteSource;
use log::{info, warn};
use rand::seq::SliceRandom;
use rand::Rng;

/// Where the returned prompt was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOrigin {
    /// First call, drawn from the freshly fetched live list.
    Live,
    /// First call, remote list was empty after filtering; fallback used.
    FallbackEmptyApi,
    /// First call, fetch failed; fallback used.
    FallbackOffline,
    /// Any later call, drawn from the already-held list.
    Cache,
}

impl PromptOrigin {
    /// Stable tag for logging and host-side notice wording.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::FallbackEmptyApi => "fallback_empty_api",
            Self::FallbackOffline => "fallback_offline",
            Self::Cache => "cache",
        }
    }
}

/// One displayed prompt together with its origin tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOutcome {
    pub quote: Quote,
    pub origin: PromptOrigin,
}

enum CacheState {
    Empty,
    Populated(Vec<Quote>),
}

/// Explicit stateful cache owned by the journal service; no process-wide
/// singleton.
pub struct PromptCache {
    state: CacheState,
}

impl Default for PromptCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptCache {
    pub fn new() -> Self {
        Self {
            state: CacheState::Empty,
        }
    }

    pub fn is_populated(&self) -> bool {
        matches!(self.state, CacheState::Populated(_))
    }

    /// Returns a prompt, fetching through `source` only on the first call.
    ///
    /// # Contract
    /// - POPULATED: random pick from the held list, origin `Cache`.
    /// - EMPTY: one fetch; success with usable entries populates the live
    ///   list, an empty-after-filter or failed fetch populates the fallback
    ///   list. The origin tag distinguishes the three entry paths.
    pub fn prompt<S, R>(&mut self, source: &S, rng: &mut R) -> PromptOutcome
    where
        S: QuoteSource,
        R: Rng,
    {
        if let CacheState::Populated(quotes) = &self.state {
            return PromptOutcome {
                quote: pick(quotes, rng),
                origin: PromptOrigin::Cache,
            };
        }

        let (quotes, origin) = match source.fetch_quotes() {
            Ok(fetched) => {
                let usable: Vec<Quote> =
                    fetched.into_iter().filter(|q| q.is_usable()).collect();
                if usable.is_empty() {
                    info!("event=prompt_populate module=quote status=ok origin=fallback_empty_api");
                    (fallback_prompts(), PromptOrigin::FallbackEmptyApi)
                } else {
                    info!(
                        "event=prompt_populate module=quote status=ok origin=live count={}",
                        usable.len()
                    );
                    (usable, PromptOrigin::Live)
                }
            }
            Err(err) => {
                warn!("event=prompt_populate module=quote status=degraded origin=fallback_offline error={err}");
                (fallback_prompts(), PromptOrigin::FallbackOffline)
            }
        };

        let quote = pick(&quotes, rng);
        self.state = CacheState::Populated(quotes);
        PromptOutcome { quote, origin }
    }
}

fn pick<R: Rng>(quotes: &[Quote], rng: &mut R) -> Quote {
    match quotes.choose(rng) {
        Some(quote) if quote.is_usable() => quote.clone(),
        _ => Quote::new(DEFAULT_REFLECTION, None),
    }
}
