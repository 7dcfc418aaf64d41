//! Best-score persistence
//!
//! A single integer survives the session: the best score. Persisted to
//! LocalStorage on web as a decimal string; absent or unparsable values
//! read back as 0, never as an error.

use std::cell::Cell;

/// Where the best score lives between sessions.
///
/// `save` is idempotent and is called once per game over with the already
/// maximized value.
pub trait ScoreStore {
    fn load(&self) -> u32;
    fn save(&self, best: u32);
}

/// Parse a stored value, treating anything unexpected as "no best yet".
/// (Reached only from the wasm store and tests.)
#[allow(dead_code)]
fn parse_best(raw: Option<String>) -> u32 {
    raw.and_then(|s| serde_json::from_str::<u32>(&s).ok())
        .unwrap_or(0)
}

/// LocalStorage-backed store (web build).
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalScore;

#[cfg(target_arch = "wasm32")]
impl LocalScore {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "skyflap-best-score";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalScore {
    fn load(&self) -> u32 {
        let raw = Self::storage().and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten());
        let best = parse_best(raw);
        log::info!("Loaded best score: {}", best);
        best
    }

    fn save(&self, best: u32) {
        if let Some(storage) = Self::storage() {
            if let Ok(json) = serde_json::to_string(&best) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Best score saved: {}", best);
            }
        }
    }
}

/// In-memory store for native runs and tests.
#[derive(Debug, Default)]
pub struct MemoryScore {
    best: Cell<u32>,
}

impl MemoryScore {
    pub fn new(best: u32) -> Self {
        Self {
            best: Cell::new(best),
        }
    }
}

impl ScoreStore for MemoryScore {
    fn load(&self) -> u32 {
        self.best.get()
    }

    fn save(&self, best: u32) {
        self.best.set(best);
    }
}
