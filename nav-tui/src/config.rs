//! Links file loading.
//!
//! The file is JSON: either a bare array of links, or an object with a
//! `links` array and an optional `autoClickIndex`.

use std::fs;
use std::path::{Path, PathBuf};

use ca_nav::{LinkDescriptor, links_from_json};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors loading the links file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    #[serde(default)]
    links: Value,
    #[serde(default = "no_auto_click")]
    auto_click_index: i64,
}

fn no_auto_click() -> i64 {
    -1
}

/// What the host feeds into the widget at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavConfig {
    pub links: Vec<LinkDescriptor>,
    pub auto_click_index: i64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            links: vec![
                LinkDescriptor::new("/dashboard", "Dashboard").rel("describedby:collection"),
                LinkDescriptor::new("/contacts", "Contacts").rel("describedby:collection"),
                LinkDescriptor::new("/settings", "Settings").rel("describedby:item"),
                LinkDescriptor::new("/about", "About"),
            ],
            auto_click_index: 0,
        }
    }
}

impl NavConfig {
    /// Parse a links document.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        if value.is_array() {
            return Ok(Self {
                links: links_from_json(&value),
                auto_click_index: no_auto_click(),
            });
        }

        let file: ConfigFile = serde_json::from_value(value)?;
        Ok(Self {
            links: links_from_json(&file.links),
            auto_click_index: file.auto_click_index,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let json_error = |source: serde_json::Error| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        };
        let value: Value = serde_json::from_str(&text).map_err(json_error)?;
        Self::from_json(value).map_err(json_error)
    }

    /// Load from `explicit` if given, else the default links file if it
    /// exists, else the built-in sample.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            log::info!("loading links from {}", path.display());
            return Self::load(&path);
        }

        match crate::paths::links_file() {
            Some(path) if path.exists() => {
                log::info!("loading links from {}", path.display());
                Self::load(&path)
            }
            _ => {
                log::info!("no links file, using built-in sample");
                Ok(Self::default())
            }
        }
    }
}
