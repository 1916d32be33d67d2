// SPDX-License-Identifier: GPL-3.0-only

//! Typed accessors over a preference store
//!
//! Every enumerated setting reads through [`PreferenceCodec::decode`] and
//! writes through [`PreferenceCodec::encode`] under the type's own key.
//! Reads are never cached; each call goes to the store.

use crate::codec::PreferenceCodec;
use crate::constants::keys;
use crate::errors::{PrefsError, PrefsResult};
use crate::location::SavedUri;
use crate::modes::{
    CameraFacing, CameraMode, GridMode, PhotoCaptureMode, PhotoEffect, PhotoFlashMode,
    VideoQuality,
};
use crate::store::{self, PreferenceEditor, PreferenceStore};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Named setting, used where the setting is chosen at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    LastCameraFacing,
    LastCameraMode,
    LastGridMode,
    PhotoCaptureMode,
    PhotoFlashMode,
    PhotoEffect,
    VideoQuality,
    LastSavedUri,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 8] = [
        PreferenceKey::LastCameraFacing,
        PreferenceKey::LastCameraMode,
        PreferenceKey::LastGridMode,
        PreferenceKey::PhotoCaptureMode,
        PreferenceKey::PhotoFlashMode,
        PreferenceKey::PhotoEffect,
        PreferenceKey::VideoQuality,
        PreferenceKey::LastSavedUri,
    ];

    /// Store key for this setting
    pub fn name(&self) -> &'static str {
        match self {
            PreferenceKey::LastCameraFacing => CameraFacing::KEY,
            PreferenceKey::LastCameraMode => CameraMode::KEY,
            PreferenceKey::LastGridMode => GridMode::KEY,
            PreferenceKey::PhotoCaptureMode => PhotoCaptureMode::KEY,
            PreferenceKey::PhotoFlashMode => PhotoFlashMode::KEY,
            PreferenceKey::PhotoEffect => PhotoEffect::KEY,
            PreferenceKey::VideoQuality => VideoQuality::KEY,
            PreferenceKey::LastSavedUri => keys::LAST_SAVED_URI,
        }
    }

    /// Look up a setting by its store key
    pub fn from_name(name: &str) -> PrefsResult<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.name() == name)
            .ok_or_else(|| PrefsError::UnknownKey(name.to_string()))
    }

    /// Accepted tokens, or `None` for free-form values
    pub fn expected_tokens(&self) -> Option<String> {
        match self {
            PreferenceKey::LastCameraFacing => Some(CameraFacing::expected_tokens()),
            PreferenceKey::LastCameraMode => Some(CameraMode::expected_tokens()),
            PreferenceKey::LastGridMode => Some(GridMode::expected_tokens()),
            PreferenceKey::PhotoCaptureMode => Some(PhotoCaptureMode::expected_tokens()),
            PreferenceKey::PhotoFlashMode => Some(PhotoFlashMode::expected_tokens()),
            PreferenceKey::PhotoEffect => Some(PhotoEffect::expected_tokens()),
            PreferenceKey::VideoQuality => Some(VideoQuality::expected_tokens()),
            PreferenceKey::LastSavedUri => None,
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every setting read at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSnapshot {
    pub last_camera_facing: CameraFacing,
    pub last_camera_mode: CameraMode,
    pub last_grid_mode: GridMode,
    pub photo_capture_mode: PhotoCaptureMode,
    pub photo_flash_mode: PhotoFlashMode,
    pub photo_effect: PhotoEffect,
    pub video_quality: VideoQuality,
    pub last_saved_uri: Option<SavedUri>,
}

/// Camera settings backed by a [`PreferenceStore`]
#[derive(Debug, Clone)]
pub struct Preferences<S> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Read any enumerated setting
    ///
    /// A missing key decodes the setting's default token; an unknown token
    /// decodes to its fallback variant.
    pub fn get<T: PreferenceCodec>(&self) -> T {
        T::decode(&self.store.get_string_or(T::KEY, T::DEFAULT_TOKEN))
    }

    /// Write any enumerated setting, persisting in the background
    pub fn set<T: PreferenceCodec>(&self, value: T) {
        self.set_with(value, false);
    }

    /// Write any enumerated setting, committing synchronously when `commit` is set
    pub fn set_with<T: PreferenceCodec>(&self, value: T, commit: bool) {
        let token = value.encode();
        debug!(key = T::KEY, token, commit, "Writing preference");
        store::edit(&self.store, commit, |editor| {
            editor.put_string(T::KEY, token);
        });
    }

    pub fn last_camera_facing(&self) -> CameraFacing {
        self.get()
    }

    pub fn set_last_camera_facing(&self, value: CameraFacing) {
        self.set(value);
    }

    pub fn last_camera_mode(&self) -> CameraMode {
        self.get()
    }

    pub fn set_last_camera_mode(&self, value: CameraMode) {
        self.set(value);
    }

    pub fn last_grid_mode(&self) -> GridMode {
        self.get()
    }

    pub fn set_last_grid_mode(&self, value: GridMode) {
        self.set(value);
    }

    /// Advance the grid overlay to its next mode and store it
    pub fn cycle_last_grid_mode(&self, commit: bool) -> GridMode {
        let next = self.last_grid_mode().next();
        self.set_with(next, commit);
        next
    }

    pub fn photo_capture_mode(&self) -> PhotoCaptureMode {
        self.get()
    }

    pub fn set_photo_capture_mode(&self, value: PhotoCaptureMode) {
        self.set(value);
    }

    pub fn photo_flash_mode(&self) -> PhotoFlashMode {
        self.get()
    }

    pub fn set_photo_flash_mode(&self, value: PhotoFlashMode) {
        self.set(value);
    }

    /// Advance the flash to its next mode and store it
    pub fn cycle_photo_flash_mode(&self, commit: bool) -> PhotoFlashMode {
        let next = self.photo_flash_mode().next();
        self.set_with(next, commit);
        next
    }

    pub fn photo_effect(&self) -> PhotoEffect {
        self.get()
    }

    pub fn set_photo_effect(&self, value: PhotoEffect) {
        self.set(value);
    }

    pub fn video_quality(&self) -> VideoQuality {
        self.get()
    }

    pub fn set_video_quality(&self, value: VideoQuality) {
        self.set(value);
    }

    /// Location of the most recently saved photo or video
    ///
    /// `None` means nothing has been saved yet. The stored text comes back
    /// unchanged; use [`SavedUri::to_url`] to parse it.
    pub fn last_saved_uri(&self) -> Option<SavedUri> {
        self.store.get_string(keys::LAST_SAVED_URI).map(SavedUri::from)
    }

    /// Record the last saved location; `None` forgets it
    pub fn set_last_saved_uri(&self, uri: Option<&SavedUri>) {
        self.set_last_saved_uri_with(uri, false);
    }

    pub fn set_last_saved_uri_with(&self, uri: Option<&SavedUri>, commit: bool) {
        debug!(uri = ?uri.map(SavedUri::as_str), commit, "Writing last saved location");
        store::edit(&self.store, commit, |editor| match uri {
            Some(uri) => {
                editor.put_string(keys::LAST_SAVED_URI, uri.as_str());
            }
            None => {
                editor.remove(keys::LAST_SAVED_URI);
            }
        });
    }

    /// Read every setting
    pub fn snapshot(&self) -> PreferenceSnapshot {
        PreferenceSnapshot {
            last_camera_facing: self.get(),
            last_camera_mode: self.get(),
            last_grid_mode: self.get(),
            photo_capture_mode: self.get(),
            photo_flash_mode: self.get(),
            photo_effect: self.get(),
            video_quality: self.get(),
            last_saved_uri: self.last_saved_uri(),
        }
    }

    /// Write every setting from `snapshot` as a single batch
    pub fn restore(&self, snapshot: &PreferenceSnapshot, commit: bool) {
        store::edit(&self.store, commit, |editor| {
            put(editor, snapshot.last_camera_facing);
            put(editor, snapshot.last_camera_mode);
            put(editor, snapshot.last_grid_mode);
            put(editor, snapshot.photo_capture_mode);
            put(editor, snapshot.photo_flash_mode);
            put(editor, snapshot.photo_effect);
            put(editor, snapshot.video_quality);
            match &snapshot.last_saved_uri {
                Some(uri) => editor.put_string(keys::LAST_SAVED_URI, uri.as_str()),
                None => editor.remove(keys::LAST_SAVED_URI),
            };
        });
    }

    /// Forget every setting, so reads return defaults again
    ///
    /// Only this crate's keys are removed; other entries in a shared store
    /// are left alone.
    pub fn reset(&self, commit: bool) {
        debug!(commit, "Resetting camera preferences");
        store::edit(&self.store, commit, |editor| {
            for key in keys::ALL {
                editor.remove(key);
            }
        });
    }

    /// Token currently in effect for `key`
    ///
    /// Enumerated settings always have a token (default or fallback applied).
    /// The saved location yields its stored text, or `None` when unset.
    pub fn get_token(&self, key: PreferenceKey) -> Option<String> {
        let token = match key {
            PreferenceKey::LastCameraFacing => self.token::<CameraFacing>(),
            PreferenceKey::LastCameraMode => self.token::<CameraMode>(),
            PreferenceKey::LastGridMode => self.token::<GridMode>(),
            PreferenceKey::PhotoCaptureMode => self.token::<PhotoCaptureMode>(),
            PreferenceKey::PhotoFlashMode => self.token::<PhotoFlashMode>(),
            PreferenceKey::PhotoEffect => self.token::<PhotoEffect>(),
            PreferenceKey::VideoQuality => self.token::<VideoQuality>(),
            PreferenceKey::LastSavedUri => {
                return self.last_saved_uri().map(SavedUri::into_string);
            }
        };
        Some(token.to_string())
    }

    /// Human label for the value currently in effect for `key`
    pub fn display_value(&self, key: PreferenceKey) -> Option<String> {
        let label = match key {
            PreferenceKey::LastCameraFacing => self.last_camera_facing().display_name(),
            PreferenceKey::LastCameraMode => self.last_camera_mode().display_name(),
            PreferenceKey::LastGridMode => self.last_grid_mode().display_name(),
            PreferenceKey::PhotoCaptureMode => self.photo_capture_mode().display_name(),
            PreferenceKey::PhotoFlashMode => self.photo_flash_mode().display_name(),
            PreferenceKey::PhotoEffect => self.photo_effect().display_name(),
            PreferenceKey::VideoQuality => self.video_quality().display_name(),
            PreferenceKey::LastSavedUri => {
                return self.last_saved_uri().map(SavedUri::into_string);
            }
        };
        Some(label.to_string())
    }

    /// Validate `value` against `key` and write it
    ///
    /// The saved location accepts any non-empty text and stores it verbatim.
    pub fn set_token(&self, key: PreferenceKey, value: &str, commit: bool) -> PrefsResult<()> {
        match key {
            PreferenceKey::LastCameraFacing => {
                self.set_with(CameraFacing::parse_token(value)?, commit)
            }
            PreferenceKey::LastCameraMode => self.set_with(CameraMode::parse_token(value)?, commit),
            PreferenceKey::LastGridMode => self.set_with(GridMode::parse_token(value)?, commit),
            PreferenceKey::PhotoCaptureMode => {
                self.set_with(PhotoCaptureMode::parse_token(value)?, commit)
            }
            PreferenceKey::PhotoFlashMode => {
                self.set_with(PhotoFlashMode::parse_token(value)?, commit)
            }
            PreferenceKey::PhotoEffect => self.set_with(PhotoEffect::parse_token(value)?, commit),
            PreferenceKey::VideoQuality => {
                self.set_with(VideoQuality::parse_token(value)?, commit)
            }
            PreferenceKey::LastSavedUri => {
                if value.is_empty() {
                    return Err(PrefsError::InvalidValue {
                        key: keys::LAST_SAVED_URI,
                        value: value.to_string(),
                        expected: "a non-empty location".to_string(),
                    });
                }
                self.set_last_saved_uri_with(Some(&SavedUri::from(value)), commit);
            }
        }
        Ok(())
    }

    fn token<T: PreferenceCodec>(&self) -> &'static str {
        self.get::<T>().encode()
    }
}

fn put<E: PreferenceEditor, T: PreferenceCodec>(editor: &mut E, value: T) {
    editor.put_string(T::KEY, value.encode());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_key_names_round_trip() {
        for key in PreferenceKey::ALL {
            assert_eq!(PreferenceKey::from_name(key.name()).unwrap(), key);
        }
        assert!(PreferenceKey::from_name("nope").is_err());
    }

    #[test]
    fn test_key_names_match_constants() {
        let names: Vec<_> = PreferenceKey::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, keys::ALL);
    }

    #[test]
    fn test_get_token_applies_defaults() {
        let prefs = Preferences::new(MemoryStore::new());
        assert_eq!(
            prefs.get_token(PreferenceKey::VideoQuality).as_deref(),
            Some("highest")
        );
        assert_eq!(prefs.get_token(PreferenceKey::LastSavedUri), None);
    }

    #[test]
    fn test_get_token_returns_stored_location_verbatim() {
        for raw in [
            "file:///tmp/a b.jpg",
            "content://media/external/../images/42",
            "HTTP://Example.COM/x",
            "/storage/emulated/0/DCIM/x.jpg",
        ] {
            let prefs = Preferences::new(MemoryStore::with_values([(keys::LAST_SAVED_URI, raw)]));
            assert_eq!(
                prefs.get_token(PreferenceKey::LastSavedUri).as_deref(),
                Some(raw)
            );
        }
    }

    #[test]
    fn test_display_value_uses_labels() {
        let prefs = Preferences::new(MemoryStore::new());
        prefs.set_video_quality(VideoQuality::Uhd);
        assert_eq!(
            prefs.display_value(PreferenceKey::VideoQuality).as_deref(),
            Some("4K")
        );
        assert_eq!(
            prefs.display_value(PreferenceKey::LastGridMode).as_deref(),
            Some("Off")
        );
        assert_eq!(prefs.display_value(PreferenceKey::LastSavedUri), None);
    }

    #[test]
    fn test_set_token_rejects_bad_values() {
        let store = MemoryStore::new();
        let prefs = Preferences::new(store.clone());

        assert!(prefs.set_token(PreferenceKey::PhotoFlashMode, "strobe", false).is_err());
        assert!(prefs.set_token(PreferenceKey::LastSavedUri, "", false).is_err());
        assert!(store.values().is_empty());
        assert_eq!(store.apply_count(), 0);

        prefs
            .set_token(PreferenceKey::PhotoFlashMode, "on", true)
            .unwrap();
        assert_eq!(prefs.photo_flash_mode(), PhotoFlashMode::On);
        assert_eq!(store.commit_count(), 1);
    }

    #[test]
    fn test_set_token_stores_location_verbatim() {
        let store = MemoryStore::new();
        let prefs = Preferences::new(store.clone());

        prefs
            .set_token(PreferenceKey::LastSavedUri, "/sdcard/DCIM/a b.jpg", false)
            .unwrap();

        assert_eq!(
            store.get_string(keys::LAST_SAVED_URI).as_deref(),
            Some("/sdcard/DCIM/a b.jpg")
        );
    }

    #[test]
    fn test_cycle_flash_and_grid() {
        let store = MemoryStore::new();
        let prefs = Preferences::new(store.clone());

        assert_eq!(prefs.cycle_photo_flash_mode(false), PhotoFlashMode::On);
        assert_eq!(prefs.cycle_photo_flash_mode(false), PhotoFlashMode::Off);
        assert_eq!(prefs.cycle_photo_flash_mode(true), PhotoFlashMode::Auto);
        assert_eq!(prefs.photo_flash_mode(), PhotoFlashMode::Auto);

        assert_eq!(prefs.cycle_last_grid_mode(false), GridMode::On3);
        assert_eq!(store.get_string(keys::LAST_GRID_MODE).as_deref(), Some("on_3"));
        assert_eq!(store.commit_count(), 1);
        assert_eq!(store.apply_count(), 3);
    }

    #[test]
    fn test_restore_is_one_batch() {
        let store = MemoryStore::new();
        let prefs = Preferences::new(store.clone());
        let snapshot = PreferenceSnapshot {
            last_camera_mode: CameraMode::Video,
            video_quality: VideoQuality::Fhd,
            last_saved_uri: Some(SavedUri::new("file:///tmp/a b.jpg")),
            ..Default::default()
        };

        prefs.restore(&snapshot, false);

        assert_eq!(store.apply_count(), 1);
        assert_eq!(prefs.snapshot(), snapshot);
    }
}
