//! Errors raised while reading or writing persisted client state.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("malformed session payload: {0}")]
    Session(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
