//! The tick loop tying geometry, rasterizer and frame buffer together.

use std::thread;
use std::time::Duration;

use tracing::{debug, info, trace};

use super::state::{ColorCycle, DriverState, RotationState};
use crate::config::Config;
use crate::frame::FrameBuffer;
use crate::geometry::{Cube, Spin};
use crate::surface::{RenderSurface, SurfaceError};

/// Owns all per-session state and advances it one tick at a time.
///
/// Each tick runs, in order: color pass, draw pass, emit (then present),
/// decay pass, cube spin, the inter-frame pause, and one quit poll.
#[derive(Debug)]
pub struct Animation {
    cube: Cube,
    buffer: FrameBuffer,
    rotation: RotationState,
    cycle: ColorCycle,
    spin: Spin,
    frame_delay: Duration,
    state: DriverState,
    ticks: u64,
}

impl Animation {
    /// Set up a session for a `rows x cols` grid.
    ///
    /// The cube is centered on the grid and sized from the config.
    pub fn new(config: &Config, rows: usize, cols: usize) -> Self {
        let size = config.cube_size(rows, cols);
        let cube = Cube::new(cols as f64 / 2.0, rows as f64 / 2.0, size, config.cube.aspect);
        let buffer = FrameBuffer::new(rows, cols, config.max_bright(), config.render.decay_rate);

        debug!(rows, cols, size, "animation created");

        Self {
            cube,
            buffer,
            rotation: RotationState::default(),
            cycle: ColorCycle::new(config.color.cycle_increment, config.color.cycle_wrap),
            spin: config.spin(),
            frame_delay: config.frame_delay(),
            state: DriverState::Running,
            ticks: 0,
        }
    }

    /// Replace the starting color cycle value.
    pub fn with_color_cycle(mut self, cycle: ColorCycle) -> Self {
        self.cycle = cycle;
        self
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn color_cycle(&self) -> ColorCycle {
        self.cycle
    }

    /// Run one tick. Does nothing once stopped.
    pub fn tick<S: RenderSurface>(&mut self, surface: &mut S) -> Result<DriverState, SurfaceError> {
        if self.state == DriverState::Stopped {
            return Ok(self.state);
        }

        self.buffer.color_pass(&mut self.cycle);
        self.buffer.draw_pass(&self.cube);
        let emitted = self.buffer.emit(&mut *surface);
        surface.present(self.ticks)?;
        self.buffer.decay_pass();

        self.cube.spin(self.spin);
        self.rotation.advance(self.spin);
        self.ticks += 1;
        trace!(tick = self.ticks, emitted, "frame presented");

        if !self.frame_delay.is_zero() {
            thread::sleep(self.frame_delay);
        }

        if surface.poll_quit()? {
            self.state = DriverState::Stopped;
            debug!(tick = self.ticks, "quit requested");
        }
        Ok(self.state)
    }

    /// Tick until a quit is requested. Returns the number of ticks run.
    pub fn run<S: RenderSurface>(&mut self, surface: &mut S) -> Result<u64, SurfaceError> {
        info!(
            rows = self.buffer.rows(),
            cols = self.buffer.cols(),
            delay_ms = self.frame_delay.as_millis() as u64,
            "animation started"
        );
        while self.tick(surface)? == DriverState::Running {}
        info!(
            ticks = self.ticks,
            angle_x = self.rotation.x,
            angle_y = self.rotation.y,
            angle_z = self.rotation.z,
            "animation stopped"
        );
        Ok(self.ticks)
    }
}
