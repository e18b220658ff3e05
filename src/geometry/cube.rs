//! Fixed cube topology and the per-frame transform pipeline.
//!
//! Vertex numbering: front face 0-1-2-3, back face 4-5-6-7, with vertex
//! `i + 4` directly behind vertex `i`. The edge list depends on this order
//! and never changes; only the coordinates behind each index do.

use super::vector::Point3;

/// Vertical compression applied to the Y and Z axes of a new cube.
///
/// Terminal cells are roughly twice as tall as they are wide.
pub const DEFAULT_ASPECT: f64 = 0.45;

/// An ordered pair of vertex indices.
pub type Edge = (usize, usize);

/// The 12 edges of a cube: front loop, back loop, then the connectors.
pub const CUBE_EDGES: [Edge; 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Per-frame rotation increments, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A wireframe cube: 8 vertices plus the fixed edge list.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    vertices: [Point3; 8],
    center: Point3,
    aspect: f64,
}

impl Cube {
    /// Build a cube centered on `(center_x, center_y)` in grid space.
    ///
    /// X extends `size` either side of the center; Y and Z extend
    /// `size * aspect`.
    pub fn new(center_x: f64, center_y: f64, size: f64, aspect: f64) -> Self {
        let center = Point3::new(center_x, center_y, 0.0);
        let hx = size;
        let hy = size * aspect;
        let hz = size * aspect;

        // (sign x, sign y, sign z) per vertex, front face first
        const CORNERS: [(f64, f64, f64); 8] = [
            (-1.0, -1.0, -1.0),
            (1.0, -1.0, -1.0),
            (1.0, 1.0, -1.0),
            (-1.0, 1.0, -1.0),
            (-1.0, -1.0, 1.0),
            (1.0, -1.0, 1.0),
            (1.0, 1.0, 1.0),
            (-1.0, 1.0, 1.0),
        ];

        let vertices = CORNERS.map(|(sx, sy, sz)| center.translate(sx * hx, sy * hy, sz * hz));

        Self {
            vertices,
            center,
            aspect,
        }
    }

    pub fn vertices(&self) -> &[Point3; 8] {
        &self.vertices
    }

    pub fn edges(&self) -> &'static [Edge; 12] {
        &CUBE_EDGES
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Endpoints of every edge, in edge-list order.
    pub fn segments(&self) -> impl Iterator<Item = (Point3, Point3)> + '_ {
        CUBE_EDGES
            .iter()
            .map(|&(a, b)| (self.vertices[a], self.vertices[b]))
    }

    /// Rotate every vertex about the cube's center.
    ///
    /// Each vertex goes through translate-to-origin, aspect compensation,
    /// rotation, inverse compensation, then translate-back.
    pub fn spin(&mut self, spin: Spin) {
        let c = self.center;
        let inv = 1.0 / self.aspect;
        for v in self.vertices.iter_mut() {
            *v = v
                .translate(-c.x, -c.y, -c.z)
                .scale(1.0, inv, inv)
                .rotate(spin.x, spin.y, spin.z)
                .scale(1.0, self.aspect, self.aspect)
                .translate(c.x, c.y, c.z);
        }
    }
}

/// Build the standard cube with the default aspect compression.
pub fn create_cube(center_x: f64, center_y: f64, size: f64) -> Cube {
    Cube::new(center_x, center_y, size, DEFAULT_ASPECT)
}

/// Largest cube size that stays inside a `rows x cols` grid at rest.
///
/// `min(max_size, min(rows / 2, cols / 4))`, using integer halves and
/// quarters of the grid.
pub fn fit_size(rows: usize, cols: usize, max_size: f64) -> f64 {
    let limit = (rows / 2).min(cols / 4) as f64;
    limit.min(max_size)
}
