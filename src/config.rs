//! Session configuration.
//!
//! Loaded from `<config_dir>/wirecube/config.toml`. Every field has a
//! default, so a missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::geometry::{fit_size, Spin, DEFAULT_ASPECT};
use crate::surface::DEFAULT_PALETTE;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Grid dimensions. Unset values follow the terminal size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cols: Option<usize>,
}

/// Glyphs, fading and frame pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Glyph ramp from blank to densest; its length sets the brightness levels
    pub palette: String,
    /// Brightness removed from each lit cell per tick
    pub decay_rate: f64,
    /// Pause between ticks in milliseconds
    pub frame_delay_ms: u64,
    /// Draw the quit hint in the bottom-right corner
    pub show_hint: bool,
    /// Draw "Frame: N" in the top-left corner
    pub show_frame_counter: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.to_string(),
            decay_rate: 0.8,
            frame_delay_ms: 60,
            show_hint: true,
            show_frame_counter: true,
        }
    }
}

/// Per-tick rotation increments in radians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            x: 0.015,
            y: 0.015,
            z: 0.001,
        }
    }
}

/// Color sweep parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Added to the color cycle once per grid cell
    pub cycle_increment: f64,
    /// Cycle wraps back to 0 here; must be a multiple of 7
    pub cycle_wrap: f64,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            cycle_increment: 0.0045,
            cycle_wrap: 70.0,
        }
    }
}

/// Cube geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    /// Half-width of the cube in columns; unset fits it to the grid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// Upper bound for the fitted size
    pub max_size: f64,
    /// Vertical compression for terminal cell aspect
    pub aspect: f64,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            size: None,
            max_size: 40.0,
            aspect: DEFAULT_ASPECT,
        }
    }
}

/// All session parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub grid: GridConfig,
    pub render: RenderConfig,
    pub rotation: RotationConfig,
    pub color: ColorConfig,
    pub cube: CubeConfig,
}

impl Config {
    /// Default location of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("wirecube").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load and validate a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write as pretty TOML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the renderer cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let glyphs = self.render.palette.chars().count();
        if glyphs < 2 {
            return Err(invalid(
                "render.palette",
                "needs at least 2 glyphs (blank + one level)",
            ));
        }
        if glyphs > u8::MAX as usize + 1 {
            return Err(invalid("render.palette", "has more than 256 glyphs"));
        }
        if !(self.render.decay_rate.is_finite() && self.render.decay_rate > 0.0) {
            return Err(invalid("render.decay_rate", "must be a positive number"));
        }

        for (field, value) in [
            ("rotation.x", self.rotation.x),
            ("rotation.y", self.rotation.y),
            ("rotation.z", self.rotation.z),
            ("color.cycle_increment", self.color.cycle_increment),
        ] {
            if !value.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
        }

        let wrap = self.color.cycle_wrap;
        if !(wrap.is_finite() && wrap > 0.0 && wrap % 7.0 == 0.0) {
            return Err(invalid("color.cycle_wrap", "must be a positive multiple of 7"));
        }

        if !(self.cube.aspect.is_finite() && self.cube.aspect > 0.0) {
            return Err(invalid("cube.aspect", "must be a positive number"));
        }
        if !(self.cube.max_size.is_finite() && self.cube.max_size >= 0.0) {
            return Err(invalid("cube.max_size", "must be zero or positive"));
        }
        if let Some(size) = self.cube.size {
            if !(size.is_finite() && size >= 0.0) {
                return Err(invalid("cube.size", "must be zero or positive"));
            }
        }

        if self.grid.rows == Some(0) {
            return Err(invalid("grid.rows", "must be at least 1"));
        }
        if self.grid.cols == Some(0) {
            return Err(invalid("grid.cols", "must be at least 1"));
        }
        Ok(())
    }

    /// Brightness given to freshly drawn cells.
    pub fn max_bright(&self) -> u8 {
        (self.render.palette.chars().count().saturating_sub(1)).min(u8::MAX as usize) as u8
    }

    pub fn spin(&self) -> Spin {
        Spin {
            x: self.rotation.x,
            y: self.rotation.y,
            z: self.rotation.z,
        }
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.render.frame_delay_ms)
    }

    /// Grid size, preferring configured values over the surface size.
    pub fn grid_size(&self, surface_rows: usize, surface_cols: usize) -> (usize, usize) {
        (
            self.grid.rows.unwrap_or(surface_rows),
            self.grid.cols.unwrap_or(surface_cols),
        )
    }

    /// Cube size for a grid: the configured size, or the largest that fits.
    pub fn cube_size(&self, rows: usize, cols: usize) -> f64 {
        self.cube
            .size
            .unwrap_or_else(|| fit_size(rows, cols, self.cube.max_size))
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
