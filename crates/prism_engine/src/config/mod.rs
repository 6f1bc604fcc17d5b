//! Renderer configuration
//!
//! TOML-loadable settings for the rendering core. All fields have
//! defaults, so a partial (or absent) config file is fine.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors from loading configuration files
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file content is not valid TOML for [`RendererConfig`]
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings consumed by [`crate::render::Renderer`] at construction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// RGBA clear color for the default render target
    pub background_color: [f32; 4],
    /// Initial viewport width in pixels
    pub viewport_width: u32,
    /// Initial viewport height in pixels
    pub viewport_height: u32,
    /// Capacity of the shader-side light array
    pub max_lights: usize,
    /// Folder mesh paths in scene descriptions are resolved against
    pub assets_folder: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            background_color: [1.0, 1.0, 1.0, 1.0],
            viewport_width: 800,
            viewport_height: 600,
            max_lights: crate::render::lighting::MAX_LIGHTS,
            assets_folder: "data/assets".to_string(),
        }
    }
}

impl RendererConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a config from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}
