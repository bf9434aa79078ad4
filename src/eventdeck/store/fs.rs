use super::{validate_key, StorageBackend};
use crate::error::{DeckError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;
use uuid::Uuid;

/// File-backed storage: each key is stored as `<root>/<key>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DeckError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_string(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(DeckError::Io)?;
        trace!(path = %path.display(), bytes = content.len(), "read");
        Ok(Some(content))
    }

    fn write_string(&self, key: &str, value: &str) -> Result<()> {
        let target = self.key_path(key)?;
        self.ensure_dir()?;

        // Atomic write: temp file in the same directory, then rename over the target
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value).map_err(DeckError::Io)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(DeckError::Io(e));
        }
        trace!(path = %target.display(), bytes = value.len(), "wrote");
        Ok(())
    }

    fn location(&self, key: &str) -> Result<PathBuf> {
        self.key_path(key)
    }
}
