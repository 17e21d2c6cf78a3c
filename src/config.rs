//! Viewer Configuration
//!
//! Configuration can be loaded from:
//! - Default values
//! - Config file (~/.config/floorplan-studio/config.toml)
//! - An explicit path given on the command line

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::ThemeChoice;

/// Tunable rendering and interaction constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Margin (px) kept free around the venue when fitting it to the viewport
    pub viewport_padding: f32,

    /// Background grid pitch in pixels
    pub grid_spacing: f32,

    /// Whether to draw the background grid
    pub show_grid: bool,

    /// Floor grid pitch in venue units
    pub floor_grid_pitch: f32,

    /// Outset (px) of the selection outline; also widens circular hit areas
    pub selection_padding: f32,

    /// Gap (px) between a round table's edge and its seat dots
    pub seat_standoff: f32,

    /// Seat dot radius in pixels
    pub seat_radius: f32,

    /// Corner rounding of rectangular objects in pixels
    pub corner_radius: f32,

    /// Label font size in pixels
    pub label_font_size: f32,

    /// Zoom change per toolbar button press
    pub zoom_step: f32,

    /// Pointer travel (px) after which a press becomes a pan
    pub drag_threshold: f32,

    /// Color palette
    pub theme: ThemeChoice,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            viewport_padding: 40.0,
            grid_spacing: 20.0,
            show_grid: true,
            floor_grid_pitch: 10.0,
            selection_padding: 6.0,
            seat_standoff: 6.0,
            seat_radius: 3.0,
            corner_radius: 4.0,
            label_font_size: 12.0,
            zoom_step: 0.2,
            drag_threshold: 3.0,
            theme: ThemeChoice::Dark,
        }
    }
}

/// Config file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ViewerConfig {
    /// Default config location
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("floorplan-studio/config.toml"))
            .unwrap_or_else(|| PathBuf::from("floorplan-studio.toml"))
    }

    /// Load configuration from the default location, falling back to defaults
    pub fn load() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content)?;
        log::debug!("Loaded viewer config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ViewerConfig::default();
        assert_eq!(config.viewport_padding, 40.0);
        assert_eq!(config.selection_padding, 6.0);
        assert!(config.show_grid);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: ViewerConfig = toml::from_str("seat_standoff = 9.5\ntheme = \"light\"\n").unwrap();
        assert_eq!(config.seat_standoff, 9.5);
        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(config.grid_spacing, 20.0);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        let config = ViewerConfig {
            drag_threshold: 5.0,
            show_grid: false,
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = ViewerConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "viewport_padding = \"wide\"").unwrap();

        assert!(matches!(
            ViewerConfig::load_from(&path),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            ViewerConfig::load_from(&dir.path().join("missing.toml")),
            Err(ConfigError::Io { .. })
        ));
    }
}
