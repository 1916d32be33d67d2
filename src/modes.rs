// SPDX-License-Identifier: GPL-3.0-only

//! Camera setting enumerations and their stored tokens
//!
//! The serde representation of every variant is the same token the codec
//! stores, so a serialized [`PreferenceSnapshot`](crate::PreferenceSnapshot)
//! reads exactly like the preferences file.

use crate::codec::PreferenceCodec;
use crate::constants::{defaults, keys};
use crate::errors::PrefsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which way the active camera points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraFacing {
    Unknown,
    Front,
    #[default]
    Back,
    /// USB or otherwise detachable camera
    External,
}

impl CameraFacing {
    pub const ALL: [CameraFacing; 4] = [
        CameraFacing::Unknown,
        CameraFacing::Front,
        CameraFacing::Back,
        CameraFacing::External,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CameraFacing::Unknown => "Unknown",
            CameraFacing::Front => "Front",
            CameraFacing::Back => "Back",
            CameraFacing::External => "External",
        }
    }
}

impl PreferenceCodec for CameraFacing {
    const KEY: &'static str = keys::LAST_CAMERA_FACING;
    const DEFAULT_TOKEN: &'static str = defaults::LAST_CAMERA_FACING;
    const FALLBACK: Self = CameraFacing::Back;
    const TABLE: &'static [(Self, &'static str)] = &[
        (CameraFacing::Unknown, "unknown"),
        (CameraFacing::Front, "front"),
        (CameraFacing::Back, "back"),
        (CameraFacing::External, "external"),
    ];
}

/// Capture mode selected in the mode switcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    #[default]
    Photo,
    Video,
}

impl CameraMode {
    pub const ALL: [CameraMode; 2] = [CameraMode::Photo, CameraMode::Video];

    pub fn display_name(&self) -> &'static str {
        match self {
            CameraMode::Photo => "Photo",
            CameraMode::Video => "Video",
        }
    }
}

impl PreferenceCodec for CameraMode {
    const KEY: &'static str = keys::LAST_CAMERA_MODE;
    const DEFAULT_TOKEN: &'static str = defaults::LAST_CAMERA_MODE;
    const FALLBACK: Self = CameraMode::Photo;
    const TABLE: &'static [(Self, &'static str)] =
        &[(CameraMode::Photo, "photo"), (CameraMode::Video, "video")];
}

/// Composition grid drawn over the preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GridMode {
    #[default]
    #[serde(rename = "off")]
    Off,
    /// Rule of thirds (3x3)
    #[serde(rename = "on_3")]
    On3,
}

impl GridMode {
    pub const ALL: [GridMode; 2] = [GridMode::Off, GridMode::On3];

    /// Cycle to the next mode: Off -> On3 -> Off
    pub fn next(self) -> Self {
        match self {
            GridMode::Off => GridMode::On3,
            GridMode::On3 => GridMode::Off,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GridMode::Off => "Off",
            GridMode::On3 => "3x3",
        }
    }
}

impl PreferenceCodec for GridMode {
    const KEY: &'static str = keys::LAST_GRID_MODE;
    const DEFAULT_TOKEN: &'static str = defaults::LAST_GRID_MODE;
    const FALLBACK: Self = GridMode::Off;
    const TABLE: &'static [(Self, &'static str)] = &[(GridMode::Off, "off"), (GridMode::On3, "on_3")];
}

/// Trade-off between image quality and shutter latency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoCaptureMode {
    #[default]
    MaximizeQuality,
    MinimizeLatency,
    /// Capture from a ring buffer of frames taken before the shutter press
    ZeroShutterLag,
}

impl PhotoCaptureMode {
    pub const ALL: [PhotoCaptureMode; 3] = [
        PhotoCaptureMode::MaximizeQuality,
        PhotoCaptureMode::MinimizeLatency,
        PhotoCaptureMode::ZeroShutterLag,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PhotoCaptureMode::MaximizeQuality => "Maximize quality",
            PhotoCaptureMode::MinimizeLatency => "Minimize latency",
            PhotoCaptureMode::ZeroShutterLag => "Zero shutter lag",
        }
    }
}

impl PreferenceCodec for PhotoCaptureMode {
    const KEY: &'static str = keys::PHOTO_CAPTURE_MODE;
    const DEFAULT_TOKEN: &'static str = defaults::PHOTO_CAPTURE_MODE;
    const FALLBACK: Self = PhotoCaptureMode::MaximizeQuality;
    const TABLE: &'static [(Self, &'static str)] = &[
        (PhotoCaptureMode::MaximizeQuality, "maximize_quality"),
        (PhotoCaptureMode::MinimizeLatency, "minimize_latency"),
        (PhotoCaptureMode::ZeroShutterLag, "zero_shutter_lag"),
    ];
}

/// Flash behaviour for still captures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoFlashMode {
    /// Fire when the scene is dark
    #[default]
    Auto,
    On,
    Off,
}

impl PhotoFlashMode {
    pub const ALL: [PhotoFlashMode; 3] =
        [PhotoFlashMode::Auto, PhotoFlashMode::On, PhotoFlashMode::Off];

    /// Cycle to the next mode: Auto -> On -> Off -> Auto
    pub fn next(self) -> Self {
        match self {
            PhotoFlashMode::Auto => PhotoFlashMode::On,
            PhotoFlashMode::On => PhotoFlashMode::Off,
            PhotoFlashMode::Off => PhotoFlashMode::Auto,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PhotoFlashMode::Auto => "Auto",
            PhotoFlashMode::On => "On",
            PhotoFlashMode::Off => "Off",
        }
    }
}

impl PreferenceCodec for PhotoFlashMode {
    const KEY: &'static str = keys::PHOTO_FLASH_MODE;
    const DEFAULT_TOKEN: &'static str = defaults::PHOTO_FLASH_MODE;
    const FALLBACK: Self = PhotoFlashMode::Auto;
    const TABLE: &'static [(Self, &'static str)] = &[
        (PhotoFlashMode::Auto, "auto"),
        (PhotoFlashMode::On, "on"),
        (PhotoFlashMode::Off, "off"),
    ];
}

/// Vendor processing effect applied to still captures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoEffect {
    #[default]
    None,
    /// Background blur
    Bokeh,
    Hdr,
    Night,
    FaceRetouch,
    /// Let the device pick an effect per scene
    Auto,
}

impl PhotoEffect {
    pub const ALL: [PhotoEffect; 6] = [
        PhotoEffect::None,
        PhotoEffect::Bokeh,
        PhotoEffect::Hdr,
        PhotoEffect::Night,
        PhotoEffect::FaceRetouch,
        PhotoEffect::Auto,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PhotoEffect::None => "None",
            PhotoEffect::Bokeh => "Bokeh",
            PhotoEffect::Hdr => "HDR",
            PhotoEffect::Night => "Night",
            PhotoEffect::FaceRetouch => "Face retouch",
            PhotoEffect::Auto => "Auto",
        }
    }
}

impl PreferenceCodec for PhotoEffect {
    const KEY: &'static str = keys::PHOTO_EFFECT;
    const DEFAULT_TOKEN: &'static str = defaults::PHOTO_EFFECT;
    const FALLBACK: Self = PhotoEffect::None;
    const TABLE: &'static [(Self, &'static str)] = &[
        (PhotoEffect::None, "none"),
        (PhotoEffect::Bokeh, "bokeh"),
        (PhotoEffect::Hdr, "hdr"),
        (PhotoEffect::Night, "night"),
        (PhotoEffect::FaceRetouch, "face_retouch"),
        (PhotoEffect::Auto, "auto"),
    ];
}

/// Video recording quality tier
///
/// `Lowest` and `Highest` are relative to what the active camera supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoQuality {
    Lowest,
    /// 1280x720
    Hd,
    /// 1920x1080
    Fhd,
    /// 3840x2160
    Uhd,
    #[default]
    Highest,
}

impl VideoQuality {
    pub const ALL: [VideoQuality; 5] = [
        VideoQuality::Lowest,
        VideoQuality::Hd,
        VideoQuality::Fhd,
        VideoQuality::Uhd,
        VideoQuality::Highest,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            VideoQuality::Lowest => "Lowest",
            VideoQuality::Hd => "720p",
            VideoQuality::Fhd => "1080p",
            VideoQuality::Uhd => "4K",
            VideoQuality::Highest => "Highest",
        }
    }
}

impl PreferenceCodec for VideoQuality {
    const KEY: &'static str = keys::VIDEO_QUALITY;
    const DEFAULT_TOKEN: &'static str = defaults::VIDEO_QUALITY;
    const FALLBACK: Self = VideoQuality::Highest;
    const TABLE: &'static [(Self, &'static str)] = &[
        (VideoQuality::Lowest, "lowest"),
        (VideoQuality::Hd, "hd"),
        (VideoQuality::Fhd, "fhd"),
        (VideoQuality::Uhd, "uhd"),
        (VideoQuality::Highest, "highest"),
    ];
}

macro_rules! impl_token_traits {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.encode())
                }
            }

            impl FromStr for $ty {
                type Err = PrefsError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as PreferenceCodec>::parse_token(s)
                }
            }
        )+
    };
}

impl_token_traits!(
    CameraFacing,
    CameraMode,
    GridMode,
    PhotoCaptureMode,
    PhotoFlashMode,
    PhotoEffect,
    VideoQuality,
);
