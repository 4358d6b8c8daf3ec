// SPDX-License-Identifier: MPL-2.0
//! This module handles user preferences, loading and saving them to a
//! `settings.toml` file under the platform configuration directory.
//!
//! Parsing is lenient: a missing or invalid file yields the defaults rather
//! than an error, so a corrupt preferences file can never block the editor.

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "RasterLab";

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Format name used by the save path when the user does not pick one.
    pub default_save_format: Option<String>,
    /// Multiplier applied per zoom step in the viewport.
    #[serde(default)]
    pub zoom_step_factor: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_save_format: Some(defaults::DEFAULT_SAVE_FORMAT.to_string()),
            zoom_step_factor: Some(defaults::DEFAULT_ZOOM_STEP_FACTOR),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
