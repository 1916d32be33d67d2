// SPDX-License-Identifier: GPL-3.0-only

//! Opaque location of the last saved photo or video
//!
//! The stored text is kept exactly as written. Writers on other platforms
//! store content URIs, file URIs or bare paths, and none of them may be
//! rewritten on the way back out. Parsing into a [`Url`] happens only when a
//! caller asks for it.

use crate::constants::keys;
use crate::errors::{PrefsError, PrefsResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Stored location string, returned byte for byte
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedUri(String);

impl SavedUri {
    pub fn new(raw: impl Into<String>) -> Self {
        SavedUri(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Parse the stored text as an absolute URL
    ///
    /// The returned `Url` is normalized (percent-encoding, dot segments,
    /// lowercase scheme and host); [`SavedUri::as_str`] is not.
    pub fn to_url(&self) -> PrefsResult<Url> {
        Url::parse(&self.0).map_err(|source| PrefsError::InvalidUri {
            key: keys::LAST_SAVED_URI,
            value: self.0.clone(),
            source,
        })
    }
}

impl fmt::Display for SavedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Url> for SavedUri {
    fn from(url: Url) -> Self {
        SavedUri(url.into())
    }
}

impl From<String> for SavedUri {
    fn from(raw: String) -> Self {
        SavedUri(raw)
    }
}

impl From<&str> for SavedUri {
    fn from(raw: &str) -> Self {
        SavedUri(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_text_is_untouched() {
        let uri = SavedUri::new("file:///tmp/a b.jpg");
        assert_eq!(uri.as_str(), "file:///tmp/a b.jpg");
        assert_eq!(uri.to_string(), "file:///tmp/a b.jpg");
    }

    #[test]
    fn test_to_url_normalizes_on_demand() {
        let uri = SavedUri::new("HTTP://Example.COM/x");
        assert_eq!(uri.to_url().unwrap().as_str(), "http://example.com/x");
        assert_eq!(uri.as_str(), "HTTP://Example.COM/x");
    }

    #[test]
    fn test_to_url_rejects_bare_path() {
        let uri = SavedUri::new("/storage/emulated/0/DCIM/x.jpg");
        match uri.to_url() {
            Err(PrefsError::InvalidUri { value, .. }) => {
                assert_eq!(value, "/storage/emulated/0/DCIM/x.jpg")
            }
            other => panic!("Expected InvalidUri, got {:?}", other),
        }
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let uri = SavedUri::new("content://media/external/../images/42");
        assert_eq!(
            serde_json::to_string(&uri).unwrap(),
            "\"content://media/external/../images/42\""
        );
    }
}
