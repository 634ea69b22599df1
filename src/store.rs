//! Session-scoped key-value storage
//!
//! The clipboard payload lives in the hosting browser's session storage:
//! one string under a fixed key, overwritten on every copy and cleared
//! only when the session ends. The controller needs nothing beyond
//! get/set, so an in-memory map substitutes directly in tests and in
//! non-browser hosts.

use std::collections::HashMap;

/// Fixed key the clipboard payload is stored under
pub const CLIPBOARD_KEY: &str = "linkclip-copy-links";

/// Error type for storage operations
#[derive(Debug)]
pub enum StoreError {
    /// The backing storage rejected a write (quota exceeded)
    QuotaExceeded(String),
    /// The backing storage could not be reached
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::QuotaExceeded(msg) => write!(f, "Storage quota exceeded: {}", msg),
            StoreError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Synchronous key-value storage scoped to the current session.
///
/// The store is process-wide and unsynchronized: concurrent forms in the
/// same session race with last-writer-wins semantics on the payload.
pub trait SessionStore {
    /// Read the value under `key`, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, overwriting any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store backed by a `HashMap`.
///
/// Lives as long as the process, like browser session storage lives as
/// long as the tab.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
