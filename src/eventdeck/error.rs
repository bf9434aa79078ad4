use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Invalid {noun}: {reason}")]
    Invalid { noun: &'static str, reason: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl DeckError {
    pub fn invalid(noun: &'static str, reason: impl Into<String>) -> Self {
        DeckError::Invalid {
            noun,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
