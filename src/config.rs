/// Application configuration
///
/// Every field has a default, so a partial JSON file (or none at all) is
/// enough. Command line flags are applied on top of the file values.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::args::Args;
use crate::error::{AppError, Result};

/// Top-level pages of the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Gallery,
    Viewer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory that gallery and sample-frame paths are relative to
    pub asset_dir: PathBuf,
    /// Sample frame file name inside `asset_dir`
    pub sample_frame: PathBuf,
    /// Simulated frame rate of the viewer timer
    pub tick_rate_hz: u32,
    /// Publish statistics to the display every N ticks
    pub publish_every: u64,
    /// How long published statistics stay highlighted
    pub highlight_ms: u64,
    pub start_page: Page,
    /// Preference database location (None = user data directory)
    pub database_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            sample_frame: PathBuf::from("sample-frame.jpg"),
            tick_rate_hz: 30,
            publish_every: 10,
            highlight_ms: 500,
            start_page: Page::Gallery,
            database_path: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| AppError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the explicit file if given, otherwise the per-user file if it
    /// exists, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_json_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                log::info!("Using configuration at {}", path.display());
                Self::from_json_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// ~/.config/edge-showcase/config.json on Linux
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("edge-showcase").join("config.json"))
    }

    /// Apply command line overrides
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(page) = args.page {
            self.start_page = page;
        }
        if let Some(assets) = &args.assets {
            self.asset_dir = assets.clone();
        }
        self
    }

    pub fn sample_frame_path(&self) -> PathBuf {
        self.asset_dir.join(&self.sample_frame)
    }

    /// Period of the viewer timer
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate_hz.max(1)))
    }

    pub fn highlight(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }
}
