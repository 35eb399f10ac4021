//! Durable level-progress persistence
//!
//! One key, `"currentLevel"`, holding a string-encoded level index. Read
//! once at startup, written on level advance, cleared on a full-game reset.
//! Store failures are logged and never fatal.

/// Storage key for the last reached level
pub const PROGRESS_KEY: &str = "currentLevel";

/// Durable key-value store for game progress
pub trait ProgressStore {
    fn get(&self) -> Option<String>;
    fn set(&mut self, value: &str);
    fn remove(&mut self);

    /// Read the persisted level index; missing or malformed values fall
    /// back to level 0
    fn load_level_index(&self) -> u32 {
        match self.get() {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("ignoring malformed {} value {:?}", PROGRESS_KEY, raw);
                0
            }),
            None => 0,
        }
    }

    /// Persist the level index
    fn save_level_index(&mut self, index: u32) {
        self.set(&index.to_string());
    }
}

/// In-memory store for native runs and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.value.clone()
    }

    fn set(&mut self, value: &str) {
        self.value = Some(value.to_string());
    }

    fn remove(&mut self) {
        self.value = None;
    }
}

/// LocalStorage-backed store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl ProgressStore for LocalStorageStore {
    fn get(&self) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(PROGRESS_KEY).ok()).flatten()
    }

    fn set(&mut self, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(PROGRESS_KEY, value).is_err() {
                log::warn!("failed to persist {}", PROGRESS_KEY);
            }
        }
    }

    fn remove(&mut self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(PROGRESS_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load_level_index(), 0);

        store.save_level_index(3);
        assert_eq!(store.get().as_deref(), Some("3"));
        assert_eq!(store.load_level_index(), 3);

        store.remove();
        assert_eq!(store.load_level_index(), 0);
    }

    #[test]
    fn test_malformed_value_falls_back_to_zero() {
        let mut store = MemoryStore::new();
        store.set("not-a-level");
        assert_eq!(store.load_level_index(), 0);
    }
}
