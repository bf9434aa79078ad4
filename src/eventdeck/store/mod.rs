//! # Storage Layer
//!
//! This module defines the storage port for eventdeck. The [`StorageBackend`]
//! trait is the only thing the collection store knows about persistence: a
//! synchronous string-in, string-out key-value boundary.
//!
//! ## Design Rationale
//!
//! Storage is injected rather than reached through global state:
//! - **Testing** runs against [`memory::MemBackend`] (no filesystem needed)
//! - **Production** uses [`fs::FsBackend`], one JSON file per key
//! - [`collection::Collection`] stays free of any I/O detail
//!
//! ## Storage Format
//!
//! For `FsBackend`:
//! ```text
//! <data-dir>/
//! ├── tickets.json        # JSON array of tickets
//! ├── coupons.json
//! ├── sponsors.json
//! ├── activities.json
//! └── config.json         # DeckConfig
//! ```
//!
//! ## Concurrency
//!
//! There is no locking. Two processes writing the same key race and the last
//! write wins. `FsBackend` writes atomically, so a reader never observes a
//! half-written file.

use crate::error::{DeckError, Result};
use std::path::PathBuf;

pub mod collection;
pub mod fs;
pub mod memory;

pub use collection::{Collection, Encoding};

/// Abstract interface for raw key-value I/O.
///
/// Keys address whole collections; values are their serialized form. Methods
/// take `&self`: backends either hold no state or use interior mutability.
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if nothing has been written yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_string(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn write_string(&self, key: &str, value: &str) -> Result<()>;

    /// Where the value for `key` lives.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn location(&self, key: &str) -> Result<PathBuf>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn read_string(&self, key: &str) -> Result<Option<String>> {
        (**self).read_string(key)
    }

    fn write_string(&self, key: &str, value: &str) -> Result<()> {
        (**self).write_string(key, value)
    }

    fn location(&self, key: &str) -> Result<PathBuf> {
        (**self).location(key)
    }
}

/// Keys become file names, so they are restricted to a portable subset.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(DeckError::InvalidKey(key.to_string()))
    }
}
