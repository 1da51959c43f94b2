//! In-memory preferences implementation.
//!
//! Used by tests and by hosts that keep a purely ephemeral session. Interior
//! mutability keeps the trait object shareable behind `&self`.

use super::{PreferencesStore, PrefsError, PrefsResult};
use std::collections::HashMap;
use std::sync::Mutex;

/// Volatile `PreferencesStore` backed by a mutex-guarded map.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferencesStore for MemoryPreferences {
    fn get(&self, key: &str) -> PrefsResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| PrefsError::Backend("preferences mutex poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PrefsResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| PrefsError::Backend("preferences mutex poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryPreferences;
    use crate::prefs::PreferencesStore;

    #[test]
    fn get_returns_none_for_absent_key() {
        let prefs = MemoryPreferences::new();
        assert_eq!(prefs.get("missing").unwrap(), None);
    }

    #[test]
    fn set_overwrites_whole_value() {
        let prefs = MemoryPreferences::new();
        prefs.set("k", "first").unwrap();
        prefs.set("k", "second").unwrap();
        assert_eq!(prefs.get("k").unwrap().as_deref(), Some("second"));
    }
}
