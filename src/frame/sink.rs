//! Outbound cell stream from the frame buffer to a render surface.

/// One lit cell of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LitCell {
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Glyph level in `1..=max_bright`
    pub level: u8,
    /// Color index in `1..=7`
    pub color: u8,
}

/// Receiver for the lit cells of a frame.
pub trait CellSink {
    fn put(&mut self, cell: LitCell);
}

impl CellSink for Vec<LitCell> {
    fn put(&mut self, cell: LitCell) {
        self.push(cell);
    }
}

impl<S: CellSink + ?Sized> CellSink for &mut S {
    fn put(&mut self, cell: LitCell) {
        (**self).put(cell);
    }
}
