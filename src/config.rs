//! Configuration file support for linkclip
//!
//! Reads from .linkclip/config.toml

use crate::controller::PastePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration structure
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct Config {
    /// Paste behavior settings
    #[serde(default)]
    pub paste: PasteConfig,
}

/// Paste-related configuration
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct PasteConfig {
    /// What a multi-link paste does with identifiers already in the field.
    /// Default: "merge" (union, duplicates dropped). "replace" overwrites
    /// the field with the clipboard contents.
    #[serde(default)]
    pub policy: PastePolicy,
}

impl Config {
    /// Load config from .linkclip/config.toml
    /// Returns default config if file doesn't exist or doesn't parse
    pub fn load() -> Self {
        let Ok(current_dir) = std::env::current_dir() else {
            return Self::default();
        };
        Self::load_from(&current_dir)
    }

    /// Load config, starting the directory walk from `start`
    pub fn load_from(start: &Path) -> Self {
        if let Some(path) = Self::find_config_path(start) {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                if let Ok(config) = toml::from_str(&contents) {
                    return config;
                }
            }
        }
        Self::default()
    }

    /// Find config.toml by walking up the directory tree from `start`
    fn find_config_path(start: &Path) -> Option<PathBuf> {
        let mut dir = start;

        loop {
            let config_path = dir.join(".linkclip").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }

            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }
        None
    }
}
