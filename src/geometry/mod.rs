//! Geometry for the wireframe renderer.
//!
//! - `vector`: `Point3` and its rotate / scale / translate transforms
//! - `cube`: the fixed 8-vertex, 12-edge cube and its per-frame spin

pub mod cube;
pub mod vector;

pub use cube::{create_cube, fit_size, Cube, Edge, Spin, CUBE_EDGES, DEFAULT_ASPECT};
pub use vector::{rotate, scale, translate, Point3};
