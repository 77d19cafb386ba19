//! Configuration file support for labelmark.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/labelmark/config.toml`.
//! Settings cover shape creation defaults and tool behavior.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{DrawingConfig, PolygonConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::input::tool::ToolMode;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// point_radius = 2.0
/// min_rect_extent = 5.0
/// default_tool = "rect"
///
/// [polygon]
/// close_radius = 8.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Shape creation defaults (marker radius, rectangle seed, start tool)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Polygon tool settings
    #[serde(default)]
    pub polygon: PolygonConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning
    /// is logged, so a hand-edited config never aborts startup.
    ///
    /// Validated ranges:
    /// - `point_radius`: 0.5 - 16.0
    /// - `min_rect_extent`: 1.0 - 64.0
    /// - `polygon.close_radius`: 1.0 - 64.0
    /// - `default_tool`: must parse as a tool mode, falls back to "none"
    fn validate_and_clamp(&mut self) {
        if !(0.5..=16.0).contains(&self.drawing.point_radius) {
            log::warn!(
                "Invalid point_radius {:.1}, clamping to 0.5-16.0 range",
                self.drawing.point_radius
            );
            self.drawing.point_radius = self.drawing.point_radius.clamp(0.5, 16.0);
        }

        if !(1.0..=64.0).contains(&self.drawing.min_rect_extent) {
            log::warn!(
                "Invalid min_rect_extent {:.1}, clamping to 1.0-64.0 range",
                self.drawing.min_rect_extent
            );
            self.drawing.min_rect_extent = self.drawing.min_rect_extent.clamp(1.0, 64.0);
        }

        if !(1.0..=64.0).contains(&self.polygon.close_radius) {
            log::warn!(
                "Invalid polygon close_radius {:.1}, clamping to 1.0-64.0 range",
                self.polygon.close_radius
            );
            self.polygon.close_radius = self.polygon.close_radius.clamp(1.0, 64.0);
        }

        if self.drawing.default_tool.parse::<ToolMode>().is_err() {
            log::warn!(
                "Invalid default_tool '{}', falling back to 'none'",
                self.drawing.default_tool
            );
            self.drawing.default_tool = "none".to_string();
        }
    }

    /// Loads configuration from the default config file path.
    ///
    /// Returns defaults if the file does not exist. Values outside their
    /// valid ranges are clamped with a warning.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from a specific file path.
    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to the default config file path.
    ///
    /// Serializes the config to TOML and creates the parent directory if it
    /// doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Returns the path to the config file
    /// (`~/.config/labelmark/config.toml`).
    fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("labelmark").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_within_valid_ranges() {
        let mut config = Config::default();
        config.validate_and_clamp();
        assert_eq!(config.drawing.point_radius, 2.0);
        assert_eq!(config.drawing.min_rect_extent, 5.0);
        assert_eq!(config.drawing.default_tool, "none");
        assert_eq!(config.polygon.close_radius, 8.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::default();
        config.drawing.point_radius = 100.0;
        config.drawing.min_rect_extent = 0.0;
        config.polygon.close_radius = -3.0;
        config.drawing.default_tool = "lasso".to_string();

        config.validate_and_clamp();

        assert_eq!(config.drawing.point_radius, 16.0);
        assert_eq!(config.drawing.min_rect_extent, 1.0);
        assert_eq!(config.polygon.close_radius, 1.0);
        assert_eq!(config.drawing.default_tool, "none");
    }

    #[test]
    fn load_from_parses_partial_config_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[drawing]\ndefault_tool = \"rect\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.drawing.default_tool, "rect");
        // Unspecified fields come from the serde defaults.
        assert_eq!(config.drawing.point_radius, 2.0);
        assert_eq!(config.polygon.close_radius, 8.0);
    }

    #[test]
    fn load_from_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[drawing\npoint_radius = ").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }
}
