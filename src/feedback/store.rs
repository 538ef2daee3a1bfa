//! Durable feedback collection.
//!
//! The whole collection is written as one JSON array under [`STORAGE_KEY`]
//! after every mutation. Reads and writes fail soft: a corrupt record loads as
//! an empty board, and a refused write leaves the in-memory collection intact
//! while latching a single warning for the UI to surface.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::clock::Clock;
use crate::feedback::entry::{EntryId, FeedbackEntry, default_entries};
use crate::storage::{KeyValueStore, StorageError};

/// Storage key holding the serialized collection.
pub const STORAGE_KEY: &str = "robeurope_feedbacks";

pub struct FeedbackStore<S, C> {
    storage: S,
    clock: C,
    /// Newest first.
    entries: Vec<FeedbackEntry>,
    warning: Option<StorageError>,
    warned: bool,
}

impl<S: KeyValueStore, C: Clock> FeedbackStore<S, C> {
    /// Open the store, loading whatever collection `storage` holds.
    pub fn open(storage: S, clock: C) -> Self {
        let mut store = Self { storage, clock, entries: Vec::new(), warning: None, warned: false };
        store.entries = store.load();
        store
    }

    /// Read the persisted collection. Never fails: unreadable or corrupt
    /// records are logged and treated as empty.
    #[must_use]
    pub fn load(&self) -> Vec<FeedbackEntry> {
        let raw = match self.storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                log::error!("reading feedback from storage failed: {err}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                log::error!("stored feedback is not a valid collection, starting empty: {err}");
                Vec::new()
            }
        }
    }

    /// Persist the current collection. Returns whether the write landed.
    ///
    /// The first failure latches a warning for [`Self::take_warning`]; later
    /// failures are only logged.
    pub fn save(&mut self) -> bool {
        let result = serde_json::to_string(&self.entries)
            .map_err(|err| StorageError::Backend(err.to_string()))
            .and_then(|raw| self.storage.set_item(STORAGE_KEY, &raw));
        match result {
            Ok(()) => true,
            Err(err) => {
                log::warn!("saving feedback failed, changes are kept for this session only: {err}");
                if !self.warned {
                    self.warned = true;
                    self.warning = Some(err);
                }
                false
            }
        }
    }

    /// Pending write-failure warning, handed out once.
    pub fn take_warning(&mut self) -> Option<StorageError> {
        self.warning.take()
    }

    /// Install the sample entries when the board is empty. Returns whether it
    /// did.
    pub fn ensure_seeded(&mut self) -> bool {
        if !self.entries.is_empty() {
            return false;
        }
        self.entries = default_entries(self.clock.now_millis());
        log::debug!("seeded feedback board with {} sample entries", self.entries.len());
        self.save();
        true
    }

    /// Add an entry at the head of the collection, stamped now.
    pub fn create(&mut self, author: &str, text: &str) -> FeedbackEntry {
        let entry = FeedbackEntry {
            id: self.next_id(),
            author: author.trim().to_owned(),
            text: text.trim().to_owned(),
            date: self.clock.today(),
        };
        self.entries.insert(0, entry.clone());
        self.save();
        entry
    }

    /// Replace author and text of `id` in place, resetting its date to today.
    /// Returns `false` and leaves the collection untouched when `id` is
    /// unknown.
    pub fn update(&mut self, id: EntryId, author: &str, text: &str) -> bool {
        let today = self.clock.today();
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        entry.author = author.trim().to_owned();
        entry.text = text.trim().to_owned();
        entry.date = today;
        self.save();
        true
    }

    /// Remove every entry with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.save();
        self.entries.len() != before
    }

    /// The collection, newest first.
    #[must_use]
    pub fn list(&self) -> &[FeedbackEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&FeedbackEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// The current time in milliseconds, bumped past every existing id.
    ///
    /// A stored id at `i64::MAX` leaves no room above, so the id goes below
    /// the smallest one instead, or into the first gap when both ends are
    /// taken.
    fn next_id(&self) -> EntryId {
        let now = self.clock.now_millis();
        let Some(max) = self.entries.iter().map(|e| e.id).max() else {
            return now;
        };
        if max < now {
            return now;
        }
        if let Some(next) = max.checked_add(1) {
            return next;
        }
        let min = self.entries.iter().map(|e| e.id).min().unwrap_or(max);
        if let Some(below) = min.checked_sub(1) {
            log::warn!("feedback ids exhausted above {max}, allocating {below}");
            return below;
        }
        self.first_free_id().unwrap_or(now)
    }

    fn first_free_id(&self) -> Option<EntryId> {
        let mut ids: Vec<EntryId> = self.entries.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.windows(2).find_map(|pair| {
            let candidate = pair[0].checked_add(1)?;
            (candidate < pair[1]).then_some(candidate)
        })
    }
}
