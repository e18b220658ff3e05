//! Subcommand handlers.

pub mod config;
pub mod run;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use wirecube::Config;

use crate::cli::Overrides;

/// Config file path: the explicit one, or the default location.
pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path().context("locating config file"),
    }
}

/// Load the config file (if any) and apply command-line overrides.
pub fn load_config(explicit: Option<&Path>, overrides: &Overrides) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    apply_overrides(&mut config, overrides);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut Config, overrides: &Overrides) {
    if let Some(rows) = overrides.rows {
        config.grid.rows = Some(rows);
    }
    if let Some(cols) = overrides.cols {
        config.grid.cols = Some(cols);
    }
    if let Some(size) = overrides.size {
        config.cube.size = Some(size);
    }
    if let Some(decay) = overrides.decay {
        config.render.decay_rate = decay;
    }
    if let Some(delay) = overrides.delay_ms {
        config.render.frame_delay_ms = delay;
    }
    if let Some(palette) = &overrides.palette {
        config.render.palette = palette.clone();
    }
    if overrides.no_hint {
        config.render.show_hint = false;
    }
    if overrides.no_frame_counter {
        config.render.show_frame_counter = false;
    }
}
