//! Configuration module for Book-Search-RS
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::PathBuf;

/// Environment variable pointing at an explicit settings file
pub const SETTINGS_PATH_VAR: &str = "BOOKSEARCH_SETTINGS_PATH";

/// Candidate settings file locations, in lookup order
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("book-search-rs/settings.yml"));
    }
    paths
}

/// Load settings from the first file found, or use defaults.
/// Environment overrides are applied last.
///
/// Returns the path the settings came from, if any. Nothing is logged here
/// since the subscriber is configured from the loaded settings.
pub fn load() -> Result<(Settings, Option<PathBuf>)> {
    let explicit = std::env::var(SETTINGS_PATH_VAR).ok().map(PathBuf::from);

    let found = explicit
        .into_iter()
        .chain(default_paths())
        .find(|path| path.exists());

    let mut settings = match found {
        Some(ref path) => Settings::from_file(path)?,
        None => Settings::default(),
    };

    settings.merge_env();
    Ok((settings, found))
}
