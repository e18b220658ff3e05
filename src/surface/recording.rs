//! In-memory render surface.
//!
//! Keeps every presented frame and answers quit polls from a script, so the
//! driver can be exercised without a terminal.

use std::collections::VecDeque;

use super::{RenderSurface, SurfaceError};
use crate::frame::{CellSink, LitCell};

/// Surface that records frames instead of drawing them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pending: Vec<LitCell>,
    frames: Vec<Vec<LitCell>>,
    frame_numbers: Vec<u64>,
    quit_script: VecDeque<bool>,
    polls: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request quit on the `n`th poll (1-based); earlier polls report no quit.
    pub fn quit_after(polls: usize) -> Self {
        let mut script = VecDeque::from(vec![false; polls.saturating_sub(1)]);
        script.push_back(true);
        Self {
            quit_script: script,
            ..Self::default()
        }
    }

    /// Frames presented so far.
    pub fn frames(&self) -> &[Vec<LitCell>] {
        &self.frames
    }

    /// Frame number passed to each `present`, in call order.
    pub fn frame_numbers(&self) -> &[u64] {
        &self.frame_numbers
    }

    /// Cells received since the last `present`.
    pub fn pending(&self) -> &[LitCell] {
        &self.pending
    }

    pub fn polls(&self) -> usize {
        self.polls
    }
}

impl CellSink for RecordingSurface {
    fn put(&mut self, cell: LitCell) {
        self.pending.push(cell);
    }
}

impl RenderSurface for RecordingSurface {
    fn present(&mut self, frame: u64) -> Result<(), SurfaceError> {
        self.frame_numbers.push(frame);
        self.frames.push(std::mem::take(&mut self.pending));
        Ok(())
    }

    fn poll_quit(&mut self) -> Result<bool, SurfaceError> {
        self.polls += 1;
        Ok(self.quit_script.pop_front().unwrap_or(false))
    }
}
