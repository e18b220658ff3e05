//! Tests for the animation driver lifecycle.

use wirecube::{Animation, ColorCycle, Config, DriverState, RecordingSurface};

fn config() -> Config {
    let mut config = Config::default();
    config.render.frame_delay_ms = 0;
    config
}

#[test]
fn one_tick_without_quit_stays_running() {
    let mut animation = Animation::new(&config(), 20, 40);
    let mut surface = RecordingSurface::new();

    assert_eq!(animation.tick(&mut surface).unwrap(), DriverState::Running);
    assert_eq!(animation.state(), DriverState::Running);
    assert_eq!(surface.frames().len(), 1);
}

#[test]
fn quit_poll_stops_driver_and_no_more_frames_are_emitted() {
    let mut animation = Animation::new(&config(), 20, 40);
    let mut surface = RecordingSurface::quit_after(1);

    assert_eq!(animation.tick(&mut surface).unwrap(), DriverState::Stopped);
    let frames = surface.frames().len();

    for _ in 0..3 {
        assert_eq!(animation.tick(&mut surface).unwrap(), DriverState::Stopped);
    }
    assert_eq!(surface.frames().len(), frames);
    assert!(surface.pending().is_empty());
}

#[test]
fn identically_seeded_drivers_produce_identical_frames() {
    let seed = ColorCycle::starting_at(12.5, 0.0045, 70.0);
    let mut a = Animation::new(&config(), 24, 80).with_color_cycle(seed);
    let mut b = Animation::new(&config(), 24, 80).with_color_cycle(seed);
    let mut sa = RecordingSurface::quit_after(25);
    let mut sb = RecordingSurface::quit_after(25);

    a.run(&mut sa).unwrap();
    b.run(&mut sb).unwrap();

    assert_eq!(a.buffer().colors(), b.buffer().colors());
    assert_eq!(a.color_cycle(), b.color_cycle());
    assert_eq!(sa.frames(), sb.frames());
}

#[test]
fn color_cycle_stays_bounded_over_long_runs() {
    let mut animation = Animation::new(&config(), 40, 120);
    let mut surface = RecordingSurface::quit_after(60);
    animation.run(&mut surface).unwrap();

    let value = animation.color_cycle().value();
    assert!((0.0..70.0).contains(&value));
}

#[test]
fn emitted_cells_stay_inside_the_grid() {
    let mut cfg = config();
    cfg.rotation.x = 0.25;
    cfg.rotation.y = 0.4;
    cfg.rotation.z = 0.1;
    let mut animation = Animation::new(&cfg, 24, 80);
    let mut surface = RecordingSurface::quit_after(50);
    animation.run(&mut surface).unwrap();

    for frame in surface.frames() {
        for cell in frame {
            assert!(cell.row < 24 && cell.col < 80);
            assert!((1..=9).contains(&cell.level));
            assert!((1..=7).contains(&cell.color));
        }
    }
}

#[test]
fn explicit_grid_and_size_are_honoured() {
    let mut cfg = config();
    cfg.cube.size = Some(3.0);
    let animation = Animation::new(&cfg, 30, 100);
    let vertices = animation.cube().vertices();
    let width = vertices[1].x - vertices[0].x;
    assert!((width - 6.0).abs() < 1e-9);
    assert_eq!(animation.buffer().rows(), 30);
    assert_eq!(animation.buffer().cols(), 100);
}

#[test]
fn surface_receives_frame_numbers_in_tick_order() {
    let mut animation = Animation::new(&config(), 20, 40);
    let mut surface = RecordingSurface::quit_after(4);
    animation.run(&mut surface).unwrap();

    assert_eq!(surface.frame_numbers(), &[0, 1, 2, 3]);

    animation.tick(&mut surface).unwrap();
    assert_eq!(surface.frame_numbers().len(), 4);
}
