//! Animation driver.
//!
//! - `state`: lifecycle enum, rotation accumulators, color cycle
//! - `animation`: the per-tick sequence and the run loop

pub mod animation;
pub mod state;

pub use animation::Animation;
pub use state::{ColorCycle, DriverState, RotationState};
