//! End-to-end tests for the geometry -> rasterizer -> frame buffer pipeline.

use wirecube::geometry::CUBE_EDGES;
use wirecube::{create_cube, draw_cube, ColorCycle, FrameBuffer, Grid, LitCell, Point3, Spin};

const MAX_BRIGHT: f64 = 9.0;

#[test]
fn resting_cube_lights_at_least_one_cell_per_edge() {
    let mut grid = Grid::new(20, 40, 0.0);
    let cube = create_cube(20.0, 10.0, 5.0);
    let written = draw_cube(&mut grid, &cube, MAX_BRIGHT);

    let lit = grid.iter().filter(|(_, _, &b)| b == MAX_BRIGHT).count();
    assert!(lit >= 12, "only {} cells lit", lit);
    assert!(written >= lit);
    assert!(grid.iter().all(|(_, _, &b)| b == 0.0 || b == MAX_BRIGHT));
}

#[test]
fn emitting_a_drawn_cube_yields_one_event_per_lit_cell() {
    let mut buffer = FrameBuffer::new(20, 40, 9, 0.8);
    let mut cycle = ColorCycle::new(0.0045, 70.0);
    buffer.color_pass(&mut cycle);
    buffer.draw_pass(&create_cube(20.0, 10.0, 5.0));

    let mut events: Vec<LitCell> = Vec::new();
    let emitted = buffer.emit(&mut events);

    let lit = buffer
        .brightness()
        .iter()
        .filter(|(_, _, &b)| b == MAX_BRIGHT)
        .count();
    assert!(lit >= 12);
    assert_eq!(emitted, lit);
    assert_eq!(events.len(), lit);
    for event in &events {
        assert_eq!(event.level, 9);
        assert!((1..=7).contains(&event.color));
    }
}

#[test]
fn rotated_cube_lights_every_in_bounds_vertex() {
    let mut cube = create_cube(20.0, 10.0, 5.0);
    for _ in 0..37 {
        cube.spin(Spin {
            x: 0.015,
            y: 0.015,
            z: 0.001,
        });
    }
    let mut grid = Grid::new(20, 40, 0.0);
    draw_cube(&mut grid, &cube, MAX_BRIGHT);

    let vertices = cube.vertices();
    for &(a, b) in &CUBE_EDGES {
        for p in [vertices[a], vertices[b]] {
            let (row, col) = (p.y as usize, p.x as usize);
            assert_eq!(grid.get(row, col), Some(&MAX_BRIGHT));
        }
    }
}

#[test]
fn oversized_cube_is_clipped_not_clamped() {
    // Every vertex is far off the grid and no edge crosses it.
    let cube = create_cube(20.0, 10.0, 200.0);
    let mut grid = Grid::new(20, 40, 0.0);
    draw_cube(&mut grid, &cube, MAX_BRIGHT);

    assert!(grid.iter().all(|(_, _, &b)| b == 0.0));
}

#[test]
fn trail_fades_out_completely_without_redraw() {
    let mut buffer = FrameBuffer::new(20, 40, 9, 0.8);
    buffer.draw_pass(&create_cube(20.0, 10.0, 5.0));
    assert!(buffer.lit_count() > 0);

    let mut counts = Vec::new();
    for _ in 0..20 {
        buffer.decay_pass();
        counts.push(buffer.lit_count());
    }
    assert!(counts.windows(2).all(|w| w[1] <= w[0]));
    assert_eq!(counts.last(), Some(&0));
}

#[test]
fn degenerate_cube_draws_nothing() {
    let mut grid = Grid::new(5, 5, 0.0);
    let cube = create_cube(2.0, 2.0, 0.0);
    assert_eq!(draw_cube(&mut grid, &cube, MAX_BRIGHT), 0);

    let p = Point3::new(1.0, 1.0, 0.0);
    assert_eq!(wirecube::draw_line(&mut grid, p, p, MAX_BRIGHT), 0);
}
