//! CLI definitions for wirecube.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Rotating wireframe cube with fading trails, drawn in the terminal.
#[derive(Parser, Debug)]
#[command(name = "wirecube", version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (nothing is logged otherwise)
    #[arg(short = 'l', long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase logging verbosity (-v debug, -vv trace); default is info
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Per-run overrides for config file values.
#[derive(Args, Debug, Default, Clone)]
pub struct Overrides {
    /// Grid height in cells (default: terminal height)
    #[arg(long, global = true)]
    pub rows: Option<usize>,

    /// Grid width in cells (default: terminal width)
    #[arg(long, global = true)]
    pub cols: Option<usize>,

    /// Cube half-width in columns (default: fitted to the grid)
    #[arg(long, global = true)]
    pub size: Option<f64>,

    /// Brightness lost per tick
    #[arg(long, global = true)]
    pub decay: Option<f64>,

    /// Pause between frames in milliseconds
    #[arg(long = "delay-ms", value_name = "MS", global = true)]
    pub delay_ms: Option<u64>,

    /// Glyph ramp from blank to densest, e.g. " .:-=+*#%@"
    #[arg(long, global = true)]
    pub palette: Option<String>,

    /// Hide the quit hint
    #[arg(long, global = true)]
    pub no_hint: bool,

    /// Hide the frame counter
    #[arg(long, global = true)]
    pub no_frame_counter: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration file location
    Path,
}
