//! Run the animation in the terminal.

use anyhow::{Context, Result};
use tracing::info;
use wirecube::surface::Palette;
use wirecube::{Animation, Config, TerminalSurface};

/// Take over the terminal and animate until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn handle_run(config: &Config) -> Result<()> {
    let palette = Palette::new(&config.render.palette);
    let mut surface = TerminalSurface::new(
        palette,
        config.render.show_hint,
        config.render.show_frame_counter,
    )
        .context("failed to set up the terminal")?;

    let (surface_rows, surface_cols) = surface.size()?;
    let (rows, cols) = config.grid_size(surface_rows, surface_cols);
    info!(surface_rows, surface_cols, rows, cols, "terminal ready");

    let mut animation = Animation::new(config, rows, cols);
    animation.run(&mut surface).context("animation failed")?;
    Ok(())
}
