use thiserror::Error;

use crate::json_kind::Kind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The source text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The source stream could not be read as UTF-8 text.
    #[error(transparent)]
    Read(#[from] anyhow::Error),

    /// A path segment is absent, or a non-object was met before the path ended.
    #[error("key {segment:?} of path {path:?} not found")]
    KeyNotFound {
        path: String,
        segment: String,
    },

    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: Kind,
        found: Kind,
    },

    #[error("cannot cast {found} to {target}: {reason}")]
    Cast {
        target: Kind,
        found: Kind,
        reason: String,
    },

    /// Deserializing into a Rust type failed.
    #[error("cannot convert value: {0}")]
    Convert(#[source] serde_json::Error),
}

impl Error {
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound { .. })
    }
}
