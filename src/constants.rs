// SPDX-License-Identifier: GPL-3.0-only

//! Preference keys, default tokens and file locations
//!
//! Keys and tokens are part of the on-disk format. Renaming any of them
//! orphans values already written by earlier versions.

/// Store keys, one per setting
pub mod keys {
    // Generic prefs
    pub const LAST_CAMERA_FACING: &str = "last_camera_facing";
    pub const LAST_CAMERA_MODE: &str = "last_camera_mode";
    pub const LAST_GRID_MODE: &str = "last_grid_mode";

    // Photo prefs
    pub const PHOTO_CAPTURE_MODE: &str = "photo_capture_mode";
    pub const PHOTO_FLASH_MODE: &str = "photo_flash_mode";
    pub const PHOTO_EFFECT: &str = "photo_effect";

    // Video prefs
    pub const VIDEO_QUALITY: &str = "video_quality";

    // Last saved output
    pub const LAST_SAVED_URI: &str = "saved_uri";

    /// Every key this crate writes, in display order
    pub const ALL: [&str; 8] = [
        LAST_CAMERA_FACING,
        LAST_CAMERA_MODE,
        LAST_GRID_MODE,
        PHOTO_CAPTURE_MODE,
        PHOTO_FLASH_MODE,
        PHOTO_EFFECT,
        VIDEO_QUALITY,
        LAST_SAVED_URI,
    ];
}

/// Token used when a key has never been written
pub mod defaults {
    pub const LAST_CAMERA_FACING: &str = "back";
    pub const LAST_CAMERA_MODE: &str = "photo";
    pub const LAST_GRID_MODE: &str = "off";
    pub const PHOTO_CAPTURE_MODE: &str = "maximize_quality";
    pub const PHOTO_FLASH_MODE: &str = "auto";
    pub const PHOTO_EFFECT: &str = "none";
    pub const VIDEO_QUALITY: &str = "highest";
}

/// Environment variable overriding the preferences file location
pub const PREFERENCES_FILE_ENV: &str = "CAMERA_PREFS_FILE";

/// Environment variable making every CLI write commit synchronously
pub const COMMIT_WRITES_ENV: &str = "CAMERA_PREFS_COMMIT";

/// Directory under the user config dir holding the preferences file
pub const CONFIG_DIR_NAME: &str = "camera-prefs";

/// File name of the JSON preferences file
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";
