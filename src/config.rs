// SPDX-License-Identifier: GPL-3.0-only

//! Where preferences are stored and how writes are persisted

use crate::constants::{
    COMMIT_WRITES_ENV, CONFIG_DIR_NAME, PREFERENCES_FILE_ENV, PREFERENCES_FILE_NAME,
};
use crate::errors::PrefsResult;
use crate::preferences::Preferences;
use crate::store::FileStore;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    /// JSON file holding the preference map
    pub preferences_path: PathBuf,
    /// Commit every write synchronously instead of persisting in the background
    pub commit_writes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preferences_path: default_preferences_path(),
            commit_writes: false,
        }
    }
}

impl Config {
    /// Default config with `CAMERA_PREFS_FILE` and `CAMERA_PREFS_COMMIT` applied
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var_os(PREFERENCES_FILE_ENV),
            std::env::var_os(COMMIT_WRITES_ENV),
        )
    }

    fn from_vars(path: Option<OsString>, commit: Option<OsString>) -> Self {
        let mut config = Self::default();

        if let Some(path) = path.filter(|p| !p.is_empty()) {
            debug!(path = ?path, "Preferences path overridden by environment");
            config.preferences_path = PathBuf::from(path);
        }

        if let Some(commit) = commit {
            config.commit_writes = parse_flag(&commit).unwrap_or_else(|| {
                warn!(value = ?commit, "Ignoring unrecognized {}", COMMIT_WRITES_ENV);
                false
            });
        }

        config
    }

    /// Open the file store this config points at
    pub fn open(&self) -> PrefsResult<Preferences<FileStore>> {
        FileStore::open(&self.preferences_path).map(Preferences::new)
    }
}

/// Boolean environment flag; empty counts as unset
fn parse_flag(value: &OsString) -> Option<bool> {
    match value.to_str()?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// `<config dir>/camera-prefs/preferences.json`, or the working directory
/// when the platform has no config dir
pub fn default_preferences_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .unwrap_or_default()
        .join(PREFERENCES_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_path_override() {
        let config = Config::from_vars(Some(OsString::from("/tmp/prefs.json")), None);
        assert_eq!(config.preferences_path, PathBuf::from("/tmp/prefs.json"));
        assert!(!config.commit_writes);
    }

    #[test]
    fn test_empty_env_ignored() {
        let config = Config::from_vars(Some(OsString::new()), Some(OsString::new()));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_env_commit_flag() {
        for value in ["1", "true", "YES", " on "] {
            let config = Config::from_vars(None, Some(OsString::from(value)));
            assert!(config.commit_writes, "{value:?} should enable commits");
        }
        for value in ["0", "false", "off"] {
            let config = Config::from_vars(None, Some(OsString::from(value)));
            assert!(!config.commit_writes, "{value:?} should disable commits");
        }
    }

    #[test]
    fn test_env_commit_flag_unrecognized() {
        let config = Config::from_vars(None, Some(OsString::from("sometimes")));
        assert!(!config.commit_writes);
    }
}
