//! Terminal wireframe cube with persistence-of-vision trails.
//!
//! A cube is spun a little every tick, its edges are rasterized into a
//! persistent brightness grid, and every lit cell fades a step per tick,
//! leaving a trail behind the moving edges.
//!
//! # Usage
//!
//! ```
//! use wirecube::{Animation, Config, RecordingSurface};
//!
//! let mut config = Config::default();
//! config.render.frame_delay_ms = 0;
//!
//! let mut animation = Animation::new(&config, 20, 40);
//! let mut surface = RecordingSurface::quit_after(3);
//! let ticks = animation.run(&mut surface).unwrap();
//! assert_eq!(ticks, 3);
//! ```

pub mod config;
pub mod driver;
pub mod frame;
pub mod geometry;
pub mod raster;
pub mod surface;

pub use config::{Config, ConfigError};
pub use driver::{Animation, ColorCycle, DriverState, RotationState};
pub use frame::{CellSink, FrameBuffer, Grid, LitCell};
pub use geometry::{create_cube, Cube, Point3, Spin};
pub use raster::{draw_cube, draw_line};
pub use surface::{RecordingSurface, RenderSurface, SurfaceError, TerminalSurface};
