//! Crossterm/ratatui render surface.
//!
//! Switches the terminal to raw mode on the alternate screen with the cursor
//! hidden, and restores it when dropped.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::palette::Palette;
use super::widget::{StatusOverlay, TrailWidget};
use super::{RenderSurface, SurfaceError};
use crate::frame::{CellSink, LitCell};

/// Whether a key event should stop the animation (`q`, `Esc`, `Ctrl-C`).
pub fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Full-screen terminal surface.
pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    palette: Palette,
    cells: Vec<LitCell>,
    show_hint: bool,
    show_frame_counter: bool,
}

impl TerminalSurface {
    /// Take over the terminal.
    ///
    /// # Arguments
    /// * `palette` - Glyph ramp for brightness levels
    /// * `show_hint` - Draw the quit hint in the bottom-right corner
    /// * `show_frame_counter` - Draw "Frame: N" in the top-left corner
    pub fn new(
        palette: Palette,
        show_hint: bool,
        show_frame_counter: bool,
    ) -> Result<Self, SurfaceError> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide) {
            restore_terminal(&mut io::stdout());
            return Err(e.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore_terminal(&mut io::stdout());
                return Err(e.into());
            }
        };

        // From here on, Drop restores the terminal.
        let mut surface = Self {
            terminal,
            palette,
            cells: Vec::new(),
            show_hint,
            show_frame_counter,
        };
        surface.terminal.clear()?;
        Ok(surface)
    }

    /// Current drawable size as `(rows, cols)`.
    pub fn size(&self) -> Result<(usize, usize), SurfaceError> {
        let size = self.terminal.size()?;
        if size.width == 0 || size.height == 0 {
            return Err(SurfaceError::TooSmall {
                cols: size.width,
                rows: size.height,
            });
        }
        Ok((size.height as usize, size.width as usize))
    }
}

impl CellSink for TerminalSurface {
    fn put(&mut self, cell: LitCell) {
        self.cells.push(cell);
    }
}

impl RenderSurface for TerminalSurface {
    fn present(&mut self, frame_number: u64) -> Result<(), SurfaceError> {
        let cells = &self.cells;
        let palette = &self.palette;
        let overlay = StatusOverlay {
            frame: self.show_frame_counter.then_some(frame_number),
            show_hint: self.show_hint,
        };

        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(TrailWidget::new(cells, palette), area);
            frame.render_widget(overlay, area);
        })?;

        self.cells.clear();
        Ok(())
    }

    fn poll_quit(&mut self) -> Result<bool, SurfaceError> {
        let mut quit = false;
        // Drain everything queued so keys do not pile up between ticks.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                quit |= is_quit_key(&key);
            }
        }
        Ok(quit)
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        restore_terminal(self.terminal.backend_mut());
    }
}

/// Leave raw mode and the alternate screen, and show the cursor again.
fn restore_terminal<W: io::Write>(out: &mut W) {
    let _ = terminal::disable_raw_mode();
    let _ = execute!(out, terminal::LeaveAlternateScreen, cursor::Show);
}
