//! Durable client-side flags
//!
//! The onboarding latch is a single `"visited" -> "true"` entry in a small JSON
//! key/value file in the data directory.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use thiserror::Error;

pub const VISITED_KEY: &str = "visited";
const VISITED_VALUE: &str = "true";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt storage file: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("storage lock poisoned")]
    Poisoned,
}

pub trait VisitStore: Send + Sync {
    fn is_visited(&self) -> Result<bool, StorageError>;
    fn mark_visited(&self) -> Result<(), StorageError>;
    fn reset(&self) -> Result<(), StorageError>;
}

/// Reads the latch, treating any storage failure as "not visited" so that the
/// onboarding flow is shown again instead of failing.
pub fn has_visited(store: &dyn VisitStore) -> bool {
    match store.is_visited() {
        Ok(visited) => visited,
        Err(e) => {
            log::warn!("cannot read onboarding flag, assuming first run: {e}");
            false
        }
    }
}

/// Clears the latch so onboarding shows on the next start. A failure only
/// costs the reset, so it is logged and reported as `false`.
pub fn reset_onboarding(store: &dyn VisitStore) -> bool {
    match store.reset() {
        Ok(()) => {
            log::info!("onboarding reset");
            true
        }
        Err(e) => {
            log::warn!("cannot reset onboarding flag, keeping it: {e}");
            false
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileVisitStore {
    path: PathBuf,
}

impl FileVisitStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let text = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Entries to rewrite. A corrupt file is logged and replaced; I/O errors
    /// still fail so an unreadable file is never clobbered.
    fn read_for_update(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match self.read() {
            Err(StorageError::Corrupt(e)) => {
                log::warn!(
                    "discarding corrupt storage file {}: {e}",
                    self.path.display()
                );
                Ok(BTreeMap::new())
            }
            result => result,
        }
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl VisitStore for FileVisitStore {
    fn is_visited(&self) -> Result<bool, StorageError> {
        Ok(self
            .read()?
            .get(VISITED_KEY)
            .is_some_and(|value| value == VISITED_VALUE))
    }

    fn mark_visited(&self) -> Result<(), StorageError> {
        let mut entries = self.read_for_update()?;
        entries.insert(VISITED_KEY.to_string(), VISITED_VALUE.to_string());
        self.write(&entries)
    }

    fn reset(&self) -> Result<(), StorageError> {
        let mut entries = self.read_for_update()?;
        if entries.remove(VISITED_KEY).is_some() {
            self.write(&entries)?;
        }
        Ok(())
    }
}

/// In-memory store for tests. `failing()` simulates unavailable storage.
#[derive(Debug, Default)]
pub struct MemoryVisitStore {
    visited: Mutex<bool>,
    failing: bool,
}

impl MemoryVisitStore {
    pub fn new(visited: bool) -> Self {
        Self {
            visited: Mutex::new(visited),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            visited: Mutex::new(false),
            failing: true,
        }
    }

    fn unavailable() -> StorageError {
        StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "storage disabled",
        ))
    }
}

impl VisitStore for MemoryVisitStore {
    fn is_visited(&self) -> Result<bool, StorageError> {
        if self.failing {
            return Err(Self::unavailable());
        }
        self.visited
            .lock()
            .map(|v| *v)
            .map_err(|_| StorageError::Poisoned)
    }

    fn mark_visited(&self) -> Result<(), StorageError> {
        if self.failing {
            return Err(Self::unavailable());
        }
        *self.visited.lock().map_err(|_| StorageError::Poisoned)? = true;
        Ok(())
    }

    fn reset(&self) -> Result<(), StorageError> {
        if self.failing {
            return Err(Self::unavailable());
        }
        *self.visited.lock().map_err(|_| StorageError::Poisoned)? = false;
        Ok(())
    }
}
