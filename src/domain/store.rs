//! Concurrency-safe in-memory store mapping short codes to URL entries.
//!
//! The mapping is guarded by a single reader/writer lock covering the whole
//! map: any number of lookups proceed in parallel, while insertions and
//! click increments take the lock exclusively. Every operation is O(1)
//! under the lock (a map access plus an entry clone), so no call can stall.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::entities::UrlEntry;
use crate::utils::code_generator::generate_code;

/// Maximum code generation attempts before giving up on a `create` call.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Errors produced by [`UrlStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("URL is required")]
    EmptyUrl,

    #[error("failed to generate a unique short code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: usize },
}

/// In-memory mapping from short code to [`UrlEntry`].
///
/// The store owns its entries exclusively: lookups return clones, and the
/// only mutation after creation is [`Self::increment_clicks`]. Entries are
/// never deleted, so data lives exactly as long as the store instance.
///
/// One long-lived instance is created at startup and shared across request
/// handlers via [`crate::state::AppState`]; tests create as many independent
/// instances as they need.
#[derive(Debug, Default)]
pub struct UrlStore {
    entries: RwLock<HashMap<String, UrlEntry>>,
}

impl UrlStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new entry for `original_url` under a freshly generated code.
    ///
    /// Code uniqueness is enforced with generate-check-retry: the write lock
    /// is held across the check and the insert, so a code observed as free
    /// is still free when the entry lands. Collisions are retried up to
    /// [`MAX_CODE_ATTEMPTS`] times before failing.
    ///
    /// This is the only operation that inserts keys.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyUrl`] if `original_url` is empty.
    /// Returns [`StoreError::CodeSpaceExhausted`] when every attempted code
    /// collided with an existing key.
    pub fn create(&self, original_url: impl Into<String>) -> Result<UrlEntry, StoreError> {
        let original_url = original_url.into();
        if original_url.is_empty() {
            return Err(StoreError::EmptyUrl);
        }

        let mut entries = self.entries.write();

        for attempt in 0..MAX_CODE_ATTEMPTS {
            let code = generate_code();

            if entries.contains_key(&code) {
                tracing::warn!(attempt, "short code collision, retrying");
                continue;
            }

            let entry = UrlEntry::new(code.clone(), original_url);
            entries.insert(code, entry.clone());
            return Ok(entry);
        }

        Err(StoreError::CodeSpaceExhausted {
            attempts: MAX_CODE_ATTEMPTS,
        })
    }

    /// Looks up an entry by short code.
    ///
    /// Read-only: the click counter is not touched.
    pub fn get(&self, code: &str) -> Option<UrlEntry> {
        self.entries.read().get(code).cloned()
    }

    /// Looks up an entry for the statistics endpoint.
    ///
    /// Same contract as [`Self::get`]; kept separate because callers ask
    /// for reporting data, not a redirect target.
    pub fn stats(&self, code: &str) -> Option<UrlEntry> {
        self.get(code)
    }

    /// Increments the click counter for `code` by exactly one.
    ///
    /// The load-increment-store happens as one unit under the exclusive
    /// lock, so concurrent increments on the same code are all reflected.
    ///
    /// Returns `false` with no effect when the code is absent.
    pub fn increment_clicks(&self, code: &str) -> bool {
        let mut entries = self.entries.write();
        match entries.get_mut(code) {
            Some(entry) => {
                entry.clicks += 1;
                true
            }
            None => false,
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if no entries have been created yet.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
