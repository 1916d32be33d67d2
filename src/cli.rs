// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for preference operations
//!
//! This module provides command-line functionality for:
//! - Listing every setting
//! - Reading and writing a single setting
//! - Cycling the flash and grid toggles
//! - Resetting settings to their defaults

use camera_prefs::{FileStore, PreferenceKey, PreferenceStore, Preferences};

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Print every setting with its effective value
pub fn list(prefs: &Preferences<FileStore>, json: bool) -> CliResult {
    if json {
        let snapshot = prefs.snapshot();
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("Preferences: {}", prefs.store().path().display());
    println!();

    let width = PreferenceKey::ALL
        .iter()
        .map(|key| key.name().len())
        .max()
        .unwrap_or(0);

    for key in PreferenceKey::ALL {
        let value = prefs
            .display_value(key)
            .unwrap_or_else(|| "(unset)".to_string());
        let marker = if prefs.store().contains(key.name()) {
            ""
        } else {
            "  [default]"
        };
        println!("  {:width$}  {}{}", key.name(), value, marker, width = width);
    }

    Ok(())
}

/// Print the effective value of one setting
pub fn get(prefs: &Preferences<FileStore>, key: &str) -> CliResult {
    let key = PreferenceKey::from_name(key)?;
    match prefs.get_token(key) {
        Some(token) => println!("{}", token),
        None => println!("(unset)"),
    }
    Ok(())
}

/// Validate and store one setting
pub fn set(prefs: &Preferences<FileStore>, key: &str, value: &str, commit: bool) -> CliResult {
    let key = PreferenceKey::from_name(key)?;
    prefs.set_token(key, value, commit)?;
    println!("{} = {}", key, value);
    Ok(())
}

/// Advance a toggle-style setting to its next value
pub fn cycle(prefs: &Preferences<FileStore>, key: &str, commit: bool) -> CliResult {
    let key = PreferenceKey::from_name(key)?;
    let label = match key {
        PreferenceKey::PhotoFlashMode => prefs.cycle_photo_flash_mode(commit).display_name(),
        PreferenceKey::LastGridMode => prefs.cycle_last_grid_mode(commit).display_name(),
        other => return Err(format!("{} cannot be cycled", other).into()),
    };
    println!("{} = {}", key, label);
    Ok(())
}

/// Remove every setting
pub fn reset(prefs: &Preferences<FileStore>, commit: bool) -> CliResult {
    prefs.reset(commit);
    println!("Preferences reset to defaults");
    Ok(())
}
