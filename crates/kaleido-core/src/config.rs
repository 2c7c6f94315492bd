// File: crates/kaleido-core/src/config.rs
// Summary: TOML configuration (initial settings, stage layout, gallery location).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{KaleidoError, Result};
use crate::settings::DrawSettings;
use crate::theme::{self, Theme};
use crate::types::{Padding, GALLERY_KEY, SNAPSHOT_SIZE};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub settings: DrawSettings,
    pub stage: StageConfig,
    pub gallery: GalleryConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Fixed side length; when absent the front end derives it from the viewport.
    pub side_length: Option<u32>,
    pub padding_left: u32,
    pub padding_top: u32,
    pub theme: String,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            side_length: None,
            padding_left: 0,
            padding_top: 0,
            theme: "classic".to_string(),
        }
    }
}

impl StageConfig {
    pub fn padding(&self) -> Padding {
        Padding::new(self.padding_left, self.padding_top)
    }

    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Store file; defaults to `<data dir>/kaleido/gallery.json`.
    pub path: Option<PathBuf>,
    pub key: String,
    pub snapshot_size: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            path: None,
            key: GALLERY_KEY.to_string(),
            snapshot_size: SNAPSHOT_SIZE,
        }
    }
}

impl GalleryConfig {
    /// Configured store path, else the platform data dir, else the working directory.
    pub fn resolved_path(&self) -> PathBuf {
        self.path
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("kaleido").join("gallery.json")))
            .unwrap_or_else(|| PathBuf::from("kaleido-gallery.json"))
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|source| KaleidoError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// `~/.config/kaleido/config.toml` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kaleido").join("config.toml"))
    }

    /// Load `path` (or the default path). A missing file yields defaults; a
    /// file that fails to parse is logged and also yields defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(p) => p,
            None => return Self::default(),
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; using defaults");
                Self::default()
            }
        }
    }
}
