use crate::config::DeckConfig;
use crate::error::{DeckError, Result};
use crate::model::{CollectionKind, Record};
use crate::store::{Collection, StorageBackend};
use serde_json::Value;
use std::path::PathBuf;

pub mod add;
pub mod delete;
pub mod get;
pub mod init;
pub mod list;
pub mod paths;
pub mod reset;
pub mod update;

#[derive(Debug, Clone)]
pub struct DeckPaths {
    pub data_dir: PathBuf,
}

impl DeckPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

/// Open the collection for `T` using the seeding and encoding from `config`.
pub fn open_collection<T: Record, B: StorageBackend>(
    backend: B,
    config: &DeckConfig,
) -> Result<Collection<T, B>> {
    let seed = if config.seed_demo_data {
        T::seed()
    } else {
        Vec::new()
    };
    Collection::open_with(backend, T::KEY, seed, config.encoding())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A record flattened for presentation, independent of its concrete type.
#[derive(Debug, Clone)]
pub struct RecordView {
    pub id: String,
    pub label: String,
    pub value: Value,
}

impl RecordView {
    pub fn of<T: Record>(record: &T) -> Result<Self> {
        Ok(Self {
            id: record.id().to_string(),
            label: record.label().to_string(),
            value: serde_json::to_value(record).map_err(DeckError::Serialization)?,
        })
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub kind: Option<CollectionKind>,
    pub records: Vec<RecordView>,
    pub paths: Vec<PathBuf>,
    pub config: Option<DeckConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn push_record<T: Record>(&mut self, record: &T) -> Result<()> {
        self.records.push(RecordView::of(record)?);
        Ok(())
    }

    pub fn with_kind(mut self, kind: CollectionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: DeckConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// "coupon" -> "Coupon", for message prefixes.
pub(crate) fn capitalize(noun: &str) -> String {
    let mut chars = noun.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
