//! Line rasterization into a brightness grid.
//!
//! Points are projected orthographically: Z is ignored, X is the column
//! and Y is the row. A line is sampled `ceil(max(|dx|, |dy|))` times by
//! linear interpolation; each sample is truncated to a cell and written
//! only when it lands inside the grid. The end point itself is not
//! sampled, and a zero-length line writes nothing.

use crate::frame::Grid;
use crate::geometry::{Cube, Point3};

/// Draw the segment `p1 -> p2` into `grid`, setting lit cells to `level`.
///
/// Samples that fall outside the grid are dropped, never clamped.
/// Returns the number of in-bounds writes.
pub fn draw_line(grid: &mut Grid<f64>, p1: Point3, p2: Point3, level: f64) -> usize {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let dist = dx.abs().max(dy.abs()).ceil();

    if !dist.is_finite() || dist == 0.0 {
        return 0;
    }

    // Restrict the sample range to steps that can land on the grid so lines
    // with far-away endpoints stay cheap. Every sample is still bounds-checked.
    let Some((lo_x, hi_x)) = sample_window(p1.x, dx, dist, grid.cols() as f64) else {
        return 0;
    };
    let Some((lo_y, hi_y)) = sample_window(p1.y, dy, dist, grid.rows() as f64) else {
        return 0;
    };
    let first = lo_x.max(lo_y).max(0.0).floor();
    let last = (hi_x.min(hi_y).ceil() + 1.0).min(dist);
    if first >= last {
        return 0;
    }

    let mut written = 0;
    for i in first as u64..last as u64 {
        let t = i as f64 / dist;
        let x = p1.x + dx * t;
        let y = p1.y + dy * t;
        if grid.set_signed(y as i64, x as i64, level) {
            written += 1;
        }
    }
    written
}

/// Draw all 12 cube edges. Returns the total number of in-bounds writes.
pub fn draw_cube(grid: &mut Grid<f64>, cube: &Cube, level: f64) -> usize {
    cube.segments()
        .map(|(a, b)| draw_line(grid, a, b, level))
        .sum()
}

/// Range of step indices (as reals) where `start + delta * i / dist`
/// truncates into `[0, limit)`.
///
/// Truncation maps `(-1, limit)` onto valid cells, so that open interval is
/// used. Returns `None` when no step can land inside.
fn sample_window(start: f64, delta: f64, dist: f64, limit: f64) -> Option<(f64, f64)> {
    if !start.is_finite() {
        return None;
    }
    if delta == 0.0 {
        return (start > -1.0 && start < limit).then_some((0.0, dist));
    }
    let a = (-1.0 - start) * dist / delta;
    let b = (limit - start) * dist / delta;
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    (hi >= 0.0 && lo < dist).then_some((lo, hi))
}
