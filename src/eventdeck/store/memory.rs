use super::{validate_key, StorageBackend};
use crate::error::{DeckError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since eventdeck is single-threaded.
/// Does NOT persist data beyond the value's lifetime.
#[derive(Default)]
pub struct MemBackend {
    values: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Store a raw value directly, bypassing any serialization.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// The raw value currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    /// Number of successful writes since creation.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl StorageBackend for MemBackend {
    fn read_string(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.raw(key))
    }

    fn write_string(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        if self.simulate_write_error.get() {
            return Err(DeckError::Store("Simulated write error".to_string()));
        }
        self.insert_raw(key, value);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(PathBuf::from(format!("memory://{}", key)))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Record;

    pub struct BackendFixture {
        pub backend: MemBackend,
    }

    impl Default for BackendFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BackendFixture {
        pub fn new() -> Self {
            Self {
                backend: MemBackend::new(),
            }
        }

        /// Pre-populate the collection for `T` with the given records.
        pub fn with_records<T: Record>(self, records: &[T]) -> Self {
            let raw = serde_json::to_string(records).expect("fixture records serialize");
            self.backend.insert_raw(T::KEY, &raw);
            self
        }

        /// Store an unparseable value for `T`'s collection.
        pub fn with_corrupt<T: Record>(self) -> Self {
            self.backend.insert_raw(T::KEY, "{not json");
            self
        }
    }
}
