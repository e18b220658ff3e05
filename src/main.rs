use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config_file = cli.config.as_deref();

    match cli.command {
        None => {
            let config = commands::load_config(config_file, &cli.overrides)?;
            commands::run::handle_run(&config)
        }
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => {
                let config = commands::load_config(config_file, &cli.overrides)?;
                commands::config::handle_show(&config)
            }
            ConfigCommands::Init { force } => {
                let path = commands::resolve_path(config_file)?;
                commands::config::handle_init(&path, force)
            }
            ConfigCommands::Path => {
                let path = commands::resolve_path(config_file)?;
                commands::config::handle_path(&path)
            }
        },
    }
}

/// Log level for a `-v` count. A log file always gets at least the
/// session start/stop events.
fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Send tracing output to `--log-file` when given.
///
/// The animation owns the terminal, so logs never go to stdout/stderr.
/// `RUST_LOG` takes precedence over `-v`.
fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wirecube={}", log_level(cli.verbose))));

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("wirecube starting");
    Ok(())
}
