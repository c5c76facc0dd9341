//! Runtime configuration
//!
//! The showcase boots from an optional TOML file. A missing file is not an
//! error; every field has a default matching the built-in car demo.
//!
//! # Configuration sources (in priority order)
//!
//! 1. Environment variable: `SHOWCASE_CONFIG=/path/to/showcase.toml`
//! 2. `showcase.toml` in the working directory
//! 3. Built-in defaults
//!
//! # Example config file
//!
//! ```toml
//! [model]
//! path = "static/models/car/scene.gltf"
//! scale = 0.005
//!
//! [playback]
//! autoplay_interval = 8.0
//! run_duration = 30.0
//! catalog = "scenes.toml"   # optional; omit for the built-in catalog
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use showcase_sequencer::{CatalogError, SceneCatalog};

/// Errors loading the runtime configuration or catalog
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A referenced file could not be read
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The config file could not be parsed
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The scene catalog file was invalid
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Which model to load and how to place it
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the GLTF document
    pub path: PathBuf,
    /// Uniform scale applied when placing the model
    pub scale: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("static/models/car/scene.gltf"),
            scale: 0.005,
        }
    }
}

/// Scripted playback settings for the demo harness
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Seconds between automatic scene advances
    pub autoplay_interval: f32,
    /// Total wall-clock seconds to run before reporting and exiting
    pub run_duration: f32,
    /// Scene catalog file; `None` uses the built-in car catalog
    pub catalog: Option<PathBuf>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            autoplay_interval: 8.0,
            run_duration: 30.0,
            catalog: None,
        }
    }
}

/// Complete runtime configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Model loading settings
    pub model: ModelConfig,
    /// Playback settings
    pub playback: PlaybackConfig,
}

impl RuntimeConfig {
    /// Load configuration from the environment and working directory
    ///
    /// A missing config file falls back to defaults; a present but malformed
    /// file is an error, so typos never silently run the wrong demo.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("SHOWCASE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("showcase.toml"));

        if !path.exists() {
            log::info!("no config at '{}'; using defaults", path.display());
            return Ok(Self::default());
        }

        let config = Self::load_from_file(&path)?;
        log::info!("loaded config from '{}'", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }

    /// Resolve the scene catalog: the configured file, or the built-in one
    pub fn load_catalog(&self) -> Result<SceneCatalog, ConfigError> {
        let Some(path) = &self.playback.catalog else {
            return Ok(SceneCatalog::showcase());
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = SceneCatalog::from_toml_str(&content)?;
        log::info!(
            "loaded {} scenes from '{}'",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Log a configuration summary
    pub fn print_summary(&self) {
        log::info!("Showcase configuration:");
        log::info!(
            "  Model: {} (scale {})",
            self.model.path.display(),
            self.model.scale
        );
        log::info!(
            "  Playback: advance every {}s, run for {}s",
            self.playback.autoplay_interval,
            self.playback.run_duration
        );
        match &self.playback.catalog {
            Some(path) => log::info!("  Catalog: {}", path.display()),
            None => log::info!("  Catalog: built-in"),
        }
    }
}
