//! Configuration module for stac-proxy
//!
//! Handles loading settings from YAML files and environment variables.
//! Loading happens before logging is initialised, so the chosen file is
//! recorded in [`Settings::source`] instead of being logged here.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::PathBuf;

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_ENV: &str = "STAC_PROXY_SETTINGS_PATH";

/// Load settings from the first settings file found, or use defaults
pub fn load() -> Result<Settings> {
    if let Ok(path) = std::env::var(SETTINGS_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            return load_from(&path);
        }
    }

    for path in candidate_paths() {
        if path.exists() {
            return load_from(&path);
        }
    }

    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}

fn load_from(path: &PathBuf) -> Result<Settings> {
    let mut settings = Settings::from_file(path)?;
    settings.source = Some(path.clone());
    settings.merge_env();
    Ok(settings)
}

/// Default settings file locations, in lookup order
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/stac-proxy/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("stac-proxy/settings.yml"));
    }
    paths
}
