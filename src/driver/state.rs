//! Driver state: lifecycle, rotation accumulators and the color cycle.

use crate::geometry::Spin;

/// Number of distinct color indices (1..=7).
pub const COLOR_COUNT: u64 = 7;

/// Lifecycle of the animation driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Ticks keep running
    Running,
    /// A quit signal was received; no further passes run
    Stopped,
}

/// Total rotation applied so far, in radians.
///
/// The angles grow without bound; they are kept for reporting only, the
/// cube itself is spun incrementally each tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub fn advance(&mut self, spin: Spin) {
        self.x += spin.x;
        self.y += spin.y;
        self.z += spin.z;
    }
}

/// Running color-cycle scalar.
///
/// Advanced once per grid cell during the color pass and wrapped into
/// `[0, wrap)`. `wrap` is a multiple of 7 so wrapping never changes the
/// selected color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorCycle {
    value: f64,
    increment: f64,
    wrap: f64,
}

impl ColorCycle {
    pub fn new(increment: f64, wrap: f64) -> Self {
        Self::starting_at(0.0, increment, wrap)
    }

    /// Start the cycle at `value` (wrapped into range).
    pub fn starting_at(value: f64, increment: f64, wrap: f64) -> Self {
        let mut cycle = Self {
            value: 0.0,
            increment,
            wrap,
        };
        cycle.value = cycle.wrapped(value);
        cycle
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Color index in `1..=7` for the current value.
    pub fn color_index(&self) -> u8 {
        (self.value.floor() as u64 % COLOR_COUNT + 1) as u8
    }

    /// Step the cycle by one increment, wrapping at the bound.
    pub fn advance(&mut self) {
        self.value = self.wrapped(self.value + self.increment);
    }

    fn wrapped(&self, value: f64) -> f64 {
        if self.wrap > 0.0 && (value >= self.wrap || value < 0.0) {
            // rem_euclid rounds tiny negatives up to exactly `wrap`
            let r = value.rem_euclid(self.wrap);
            if r >= self.wrap {
                0.0
            } else {
                r
            }
        } else {
            value
        }
    }
}
