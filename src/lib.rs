// SPDX-License-Identifier: GPL-3.0-only

//! Camera Preferences - typed camera settings over a key-value store
//!
//! Each setting (camera facing, capture mode, flash, effect, video quality,
//! grid, last saved location) is stored as a string token under a fixed key.
//! This crate maps those tokens to enums and back, falling back to a default
//! when a key is missing or holds a token it does not recognize.
//!
//! # Architecture
//!
//! - [`codec`]: the token table trait shared by every setting
//! - [`modes`]: the setting enums and their tables
//! - [`store`]: store traits, scoped edits, memory and file stores
//! - [`preferences`]: the typed accessor wrapper
//! - [`location`]: the last saved location, kept as stored
//! - [`config`]: preferences file location
//!
//! # Example
//!
//! ```
//! use camera_prefs::{MemoryStore, Preferences, PhotoFlashMode};
//!
//! let prefs = Preferences::new(MemoryStore::new());
//! assert_eq!(prefs.photo_flash_mode(), PhotoFlashMode::Auto);
//!
//! prefs.set_photo_flash_mode(PhotoFlashMode::Off);
//! assert_eq!(prefs.photo_flash_mode(), PhotoFlashMode::Off);
//! ```

pub mod codec;
pub mod config;
pub mod constants;
pub mod errors;
pub mod location;
pub mod modes;
pub mod preferences;
pub mod store;

// Re-export commonly used types
pub use codec::PreferenceCodec;
pub use config::Config;
pub use errors::{PrefsError, PrefsResult};
pub use location::SavedUri;
pub use modes::{
    CameraFacing, CameraMode, GridMode, PhotoCaptureMode, PhotoEffect, PhotoFlashMode,
    VideoQuality,
};
pub use preferences::{PreferenceKey, PreferenceSnapshot, Preferences};
pub use store::{FileStore, MemoryStore, PreferenceEditor, PreferenceStore};
