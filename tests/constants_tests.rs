// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for constants module

use camera_prefs::constants::{defaults, keys};
use camera_prefs::{
    CameraFacing, CameraMode, GridMode, PhotoCaptureMode, PhotoEffect, PhotoFlashMode,
    PreferenceCodec, VideoQuality,
};

#[test]
fn test_setting_keys_match_constants() {
    assert_eq!(CameraFacing::KEY, keys::LAST_CAMERA_FACING);
    assert_eq!(CameraMode::KEY, keys::LAST_CAMERA_MODE);
    assert_eq!(GridMode::KEY, keys::LAST_GRID_MODE);
    assert_eq!(PhotoCaptureMode::KEY, keys::PHOTO_CAPTURE_MODE);
    assert_eq!(PhotoFlashMode::KEY, keys::PHOTO_FLASH_MODE);
    assert_eq!(PhotoEffect::KEY, keys::PHOTO_EFFECT);
    assert_eq!(VideoQuality::KEY, keys::VIDEO_QUALITY);
}

#[test]
fn test_stored_key_names_are_stable() {
    // Changing these orphans existing preference files
    assert_eq!(keys::LAST_CAMERA_FACING, "last_camera_facing");
    assert_eq!(keys::PHOTO_CAPTURE_MODE, "photo_capture_mode");
    assert_eq!(keys::PHOTO_FLASH_MODE, "photo_flash_mode");
    assert_eq!(keys::LAST_SAVED_URI, "saved_uri");
}

#[test]
fn test_default_tokens() {
    assert_eq!(defaults::LAST_CAMERA_FACING, "back");
    assert_eq!(defaults::LAST_CAMERA_MODE, "photo");
    assert_eq!(defaults::LAST_GRID_MODE, "off");
    assert_eq!(defaults::PHOTO_CAPTURE_MODE, "maximize_quality");
    assert_eq!(defaults::PHOTO_FLASH_MODE, "auto");
    assert_eq!(defaults::PHOTO_EFFECT, "none");
    assert_eq!(defaults::VIDEO_QUALITY, "highest");
}

#[test]
fn test_display_names_not_empty() {
    for effect in PhotoEffect::ALL {
        assert!(
            !effect.display_name().is_empty(),
            "Effect {:?} has empty display name",
            effect
        );
    }
    for quality in VideoQuality::ALL {
        assert!(!quality.display_name().is_empty());
    }
}
