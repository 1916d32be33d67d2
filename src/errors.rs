// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the preference layer

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using PrefsError
pub type PrefsResult<T> = Result<T, PrefsError>;

/// Errors surfaced by stores and the preference wrapper
///
/// Enumerated settings never fail to read; an unrecognized stored token
/// is coerced to the setting's fallback instead. Only the saved-location
/// accessor and the stores themselves produce these.
#[derive(Error, Debug)]
pub enum PrefsError {
    /// Reading or writing the backing file failed
    #[error("Storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a flat JSON string map
    #[error("Corrupt preferences file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the preference map failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A stored saved-location value is not a valid URI
    #[error("Invalid URI stored under '{key}': {value}")]
    InvalidUri {
        key: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// No setting with this key name exists
    #[error("Unknown preference key: {0}")]
    UnknownKey(String),

    /// The token is not one of the accepted values for the key
    #[error("Invalid value '{value}' for {key} (expected one of: {expected})")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: String,
    },
}

impl PrefsError {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PrefsError::Storage {
            path: path.into(),
            source,
        }
    }

    /// Whether the user can fix this by changing their input
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            PrefsError::UnknownKey(_) | PrefsError::InvalidValue { .. }
        )
    }
}
