//! Frame state that persists across ticks.
//!
//! - `grid`: generic row-major grid with bounds-checked writes
//! - `buffer`: brightness/color buffer and its per-tick passes
//! - `sink`: lit-cell stream handed to the render surface

pub mod buffer;
pub mod grid;
pub mod sink;

pub use buffer::FrameBuffer;
pub use grid::Grid;
pub use sink::{CellSink, LitCell};
