//! Render surfaces: where lit cells become glyphs on screen.
//!
//! The animation core only needs two capabilities from a surface:
//! - outbound: accept lit cells ([`CellSink`]) and flush them as a frame
//! - inbound: a non-blocking "was quit requested?" poll
//!
//! - `terminal`: crossterm + ratatui surface used by the binary
//! - `recording`: in-memory surface with scripted quit polls
//! - `widget`: ratatui widget drawing a frame's lit cells
//! - `palette`: glyph ramp and color-index mapping

mod error;
pub mod palette;
pub mod recording;
pub mod terminal;
pub mod widget;

pub use error::SurfaceError;
pub use palette::{color_for_index, Palette, DEFAULT_PALETTE};
pub use recording::RecordingSurface;
pub use terminal::{is_quit_key, TerminalSurface};
pub use widget::{StatusOverlay, TrailWidget, QUIT_HINT};

use crate::frame::CellSink;

/// A render surface the animation driver can draw to and poll.
pub trait RenderSurface: CellSink {
    /// Flush the cells received since the last call as frame number `frame`.
    ///
    /// Frames are numbered from 0 in tick order.
    fn present(&mut self, frame: u64) -> Result<(), SurfaceError>;

    /// Whether a quit was requested since the last poll. Must not block.
    fn poll_quit(&mut self) -> Result<bool, SurfaceError>;
}
