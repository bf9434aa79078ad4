//! # Persisted Collections
//!
//! A [`Collection`] is an ordered list of records addressed by one storage
//! key. Reads are served from memory; every mutation re-serializes the whole
//! list and writes it through to the backend before returning.
//!
//! ## Invariants
//!
//! - Ids are unique and non-empty. `add` assigns them; persisted data that
//!   breaks this is treated like unparseable data.
//! - The persisted value always matches the in-memory list. A mutation is
//!   staged on a copy and only committed once the write succeeded, so a
//!   failed write leaves both sides as they were.
//!
//! ## Recovery
//!
//! `open` falls back to the seed when the stored value cannot be decoded.
//! The bad value is left in place (and logged) until the next mutation
//! overwrites it. Read errors from the backend are not masked.

use super::{validate_key, StorageBackend};
use crate::error::{DeckError, Result};
use crate::model::{Record, RecordId};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// How records are serialized on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    Compact,
    #[default]
    Pretty,
}

impl Encoding {
    fn encode<T: Record>(self, items: &[T]) -> Result<String> {
        let raw = match self {
            Encoding::Compact => serde_json::to_string(items),
            Encoding::Pretty => serde_json::to_string_pretty(items),
        };
        raw.map_err(DeckError::Serialization)
    }
}

pub struct Collection<T: Record, B: StorageBackend> {
    backend: B,
    key: String,
    seed: Vec<T>,
    items: Vec<T>,
    encoding: Encoding,
}

impl<T: Record, B: StorageBackend> Collection<T, B> {
    /// Open the collection stored under `key`, seeding storage when empty.
    pub fn open(backend: B, key: impl Into<String>, seed: Vec<T>) -> Result<Self> {
        Self::open_with(backend, key, seed, Encoding::default())
    }

    /// Open the collection for `T` under its own key with its demo seed.
    pub fn open_default(backend: B) -> Result<Self> {
        Self::open(backend, T::KEY, T::seed())
    }

    pub fn open_with(
        backend: B,
        key: impl Into<String>,
        seed: Vec<T>,
        encoding: Encoding,
    ) -> Result<Self> {
        let key = key.into();
        validate_key(&key)?;
        check_ids(&seed).map_err(|reason| {
            DeckError::Store(format!("seed for {:?} is unusable: {}", key, reason))
        })?;

        let mut collection = Self {
            backend,
            key,
            items: Vec::new(),
            seed,
            encoding,
        };

        match collection.load()? {
            Some(items) => collection.items = items,
            None => {
                let seed = collection.seed.clone();
                collection.commit(seed)?;
                info!(key = %collection.key, count = collection.items.len(), "seeded collection");
            }
        }
        debug!(key = %collection.key, count = collection.items.len(), "opened collection");
        Ok(collection)
    }

    /// Reads the stored value. `Ok(None)` when nothing is stored yet.
    /// Undecodable data yields the seed without writing it.
    fn load(&self) -> Result<Option<Vec<T>>> {
        let raw = match self.backend.read_string(&self.key)? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        let decoded = serde_json::from_str::<Vec<T>>(&raw)
            .map_err(|e| e.to_string())
            .and_then(|items| check_ids(&items).map(|_| items));

        match decoded {
            Ok(items) => Ok(Some(items)),
            Err(reason) => {
                warn!(key = %self.key, %reason, "stored collection is unreadable, using seed");
                Ok(Some(self.seed.clone()))
            }
        }
    }

    /// Persist `next` and make it the current contents.
    fn commit(&mut self, next: Vec<T>) -> Result<()> {
        let raw = self.encoding.encode(&next)?;
        self.backend.write_string(&self.key, &raw)?;
        debug!(key = %self.key, count = next.len(), bytes = raw.len(), "persisted collection");
        self.items = next;
        Ok(())
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.items.iter().position(|r| r.id() == id)
    }

    fn fresh_id(&self) -> RecordId {
        loop {
            let id = RecordId::generate();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    /// Create a record from `draft` with a new id and append it.
    pub fn add(&mut self, draft: T::Draft) -> Result<T> {
        let record = T::from_draft(self.fresh_id(), draft);
        record.validate()?;

        let mut next = self.items.clone();
        next.push(record.clone());
        self.commit(next)?;
        Ok(record)
    }

    /// Merge `patch` into the record with `id`, keeping its position.
    ///
    /// Returns the updated record, or `None` when no record has that id (the
    /// contents are rewritten unchanged in that case).
    pub fn update(&mut self, id: &RecordId, patch: T::Patch) -> Result<Option<T>> {
        let mut next = self.items.clone();
        let updated = match self.position(id) {
            Some(pos) => {
                let record = &mut next[pos];
                record.apply_patch(patch);
                record.validate()?;
                Some(record.clone())
            }
            None => None,
        };
        self.commit(next)?;
        Ok(updated)
    }

    /// Remove the record with `id`. Returns it, or `None` when absent.
    pub fn delete(&mut self, id: &RecordId) -> Result<Option<T>> {
        let removed = self.get(id).cloned();
        let next: Vec<T> = self
            .items
            .iter()
            .filter(|r| r.id() != id)
            .cloned()
            .collect();
        self.commit(next)?;
        Ok(removed)
    }

    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.items.iter().find(|r| r.id() == id)
    }

    /// Replace the contents with the seed.
    pub fn reset(&mut self) -> Result<()> {
        let seed = self.seed.clone();
        self.commit(seed)
    }

    /// Re-read the stored value, picking up writes from other handles.
    pub fn reload(&mut self) -> Result<()> {
        if let Some(items) = self.load()? {
            self.items = items;
        }
        Ok(())
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }}

fn check_ids<T: Record>(items: &[T]) -> std::result::Result<(), String> {
    let mut seen = HashSet::with_capacity(items.len());
    for record in items {
        let id = record.id();
        if id.is_empty() {
            return Err("record with empty id".to_string());
        }
        if !seen.insert(id) {
            return Err(format!("duplicate id {}", id));
        }
    }
    Ok(())
}
