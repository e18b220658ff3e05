//! Persistent brightness + color frame buffer.
//!
//! The buffer survives across ticks. Each tick runs four passes in order:
//! `color_pass`, `draw_pass`, `emit`, `decay_pass`. Drawing resets traced
//! cells to full brightness and decay fades everything else, which leaves a
//! fading trail behind the moving edges.

use crate::driver::state::ColorCycle;
use crate::frame::grid::Grid;
use crate::frame::sink::{CellSink, LitCell};
use crate::geometry::Cube;
use crate::raster;

/// Brightness and color grids of identical size.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    brightness: Grid<f64>,
    color: Grid<u8>,
    max_bright: u8,
    decay_rate: f64,
}

impl FrameBuffer {
    /// Allocate a dark buffer.
    ///
    /// # Arguments
    /// * `rows` - Grid height in cells
    /// * `cols` - Grid width in cells
    /// * `max_bright` - Brightness written by the rasterizer (palette size - 1)
    /// * `decay_rate` - Brightness removed from each lit cell per tick
    pub fn new(rows: usize, cols: usize, max_bright: u8, decay_rate: f64) -> Self {
        Self {
            brightness: Grid::new(rows, cols, 0.0),
            color: Grid::new(rows, cols, 1),
            max_bright,
            decay_rate,
        }
    }

    pub fn rows(&self) -> usize {
        self.brightness.rows()
    }

    pub fn cols(&self) -> usize {
        self.brightness.cols()
    }

    pub fn max_bright(&self) -> u8 {
        self.max_bright
    }

    pub fn brightness(&self) -> &Grid<f64> {
        &self.brightness
    }

    pub fn colors(&self) -> &Grid<u8> {
        &self.color
    }

    /// Number of cells with brightness above zero.
    pub fn lit_count(&self) -> usize {
        self.brightness.iter().filter(|(_, _, &b)| b > 0.0).count()
    }

    /// Assign a color to every cell in row-major order.
    ///
    /// The cycle advances once per cell, so colors sweep diagonally across
    /// the grid and drift from frame to frame.
    pub fn color_pass(&mut self, cycle: &mut ColorCycle) {
        for cell in self.color.cells_mut() {
            *cell = cycle.color_index();
            cycle.advance();
        }
    }

    /// Stamp the cube's edges at full brightness. Returns in-bounds writes.
    pub fn draw_pass(&mut self, cube: &Cube) -> usize {
        raster::draw_cube(&mut self.brightness, cube, f64::from(self.max_bright))
    }

    /// Send every lit cell to `sink`. Returns the number of cells emitted.
    pub fn emit<S: CellSink>(&self, mut sink: S) -> usize {
        let mut emitted = 0;
        for (row, col, &b) in self.brightness.iter() {
            if b <= 0.0 {
                continue;
            }
            let color = self.color.get(row, col).copied().unwrap_or(1);
            sink.put(LitCell {
                row,
                col,
                level: self.glyph_level(b),
                color,
            });
            emitted += 1;
        }
        emitted
    }

    /// Fade every lit cell by the decay rate, flooring at zero.
    pub fn decay_pass(&mut self) {
        let rate = self.decay_rate;
        for b in self.brightness.cells_mut() {
            if *b > 0.0 {
                *b = (*b - rate).max(0.0);
            }
        }
    }

    /// Map a positive brightness onto a glyph level in `1..=max_bright`.
    ///
    /// Truncates, but never below 1: a cell that is still lit must not map
    /// to the blank glyph.
    fn glyph_level(&self, brightness: f64) -> u8 {
        let max = f64::from(self.max_bright.max(1));
        brightness.floor().clamp(1.0, max) as u8
    }
}
