// Host-side tests for the spring tension lines.

use glam::Vec2;
use margin_core::constants::*;
use margin_core::hover;
use margin_core::tension::TensionLines;
use margin_core::{Geometry, SpringConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn wide() -> Geometry {
    Geometry::measure(1920.0, 1080.0, 120.0, 1800.0).unwrap()
}

fn five_rows() -> TensionLines {
    let mut lines = TensionLines::default();
    lines.build(&wide(), &[100.0, 200.0, 300.0, 400.0, 500.0], MIN_MARGIN_LINES);
    lines
}

#[test]
fn build_makes_one_idle_line_per_row() {
    let lines = five_rows();
    assert_eq!(lines.len(), 5);
    for (i, l) in lines.lines().iter().enumerate() {
        assert_eq!(l.base_y, 100.0 * (i as f32 + 1.0));
        assert_eq!(l.spike, Vec2::ZERO);
        assert_eq!(l.velocity, Vec2::ZERO);
        assert_eq!(l.target_opacity, LINE_IDLE_OPACITY);
    }
}

#[test]
fn narrow_margin_builds_no_lines() {
    let g = Geometry::measure(900.0, 700.0, 35.0, 865.0).unwrap();
    let mut lines = TensionLines::default();
    lines.build(&g, &[100.0, 200.0], MIN_MARGIN_LINES);
    assert!(lines.is_empty());
}

#[test]
fn resync_follows_rows() {
    let mut lines = five_rows();
    lines.resync(&[50.0, 150.0, 250.0, 350.0, 450.0]);
    assert_eq!(lines.lines()[3].base_y, 350.0);
}

#[test]
fn default_spring_is_overdamped() {
    assert!(SpringConfig::default().is_overdamped());
    let ringing = SpringConfig {
        stiffness: 0.075,
        damping: 0.70,
    };
    assert!(!ringing.is_overdamped());
}

#[test]
fn spike_approaches_target_without_overshoot() {
    let mut lines = five_rows();
    let spring = SpringConfig::default();
    let target = Vec2::new(20.0, -15.0);
    lines.get_mut(0).unwrap().target_spike = target;

    let mut prev_err = target;
    for _ in 0..200 {
        lines.step(&spring);
        let l = &lines.lines()[0];
        let err = target - l.spike;
        // same sign as the initial gap, and strictly shrinking
        assert!(err.x >= 0.0 && err.x <= prev_err.x);
        assert!(err.y <= 0.0 && err.y >= prev_err.y);
        prev_err = err;
    }
    assert!(prev_err.length() < 1e-3);
}

#[test]
fn opacity_eases_toward_target() {
    let mut lines = five_rows();
    let spring = SpringConfig::default();
    lines.get_mut(1).unwrap().target_opacity = 0.3;
    lines.step(&spring);
    let first = lines.lines()[1].opacity;
    assert!(first > 0.0 && first < 0.3);
    for _ in 0..300 {
        lines.step(&spring);
    }
    assert!((lines.lines()[1].opacity - 0.3).abs() < 1e-3);
}

#[test]
fn hover_spikes_row_and_nudges_neighbours() {
    let mut lines = five_rows();
    let mut rng = StdRng::seed_from_u64(17);
    hover::spike_row(&mut lines, 2, &mut rng);
    let l = lines.lines();

    assert_ne!(l[2].target_spike, Vec2::ZERO);
    assert!(l[2].target_spike.x.abs() <= HOVER_SPIKE_X);
    assert!(l[2].target_spike.y.abs() <= HOVER_SPIKE_Y);
    assert!(l[2].target_opacity >= HOVER_OPACITY_MIN && l[2].target_opacity < HOVER_OPACITY_MAX);

    for n in [1, 3] {
        assert_eq!(l[n].target_spike.x, 0.0);
        assert!(l[n].target_spike.y.abs() <= NEIGHBOR_SPIKE_Y);
        assert_eq!(l[n].target_opacity, NEIGHBOR_OPACITY);
    }
    for far in [0, 4] {
        assert_eq!(l[far].target_spike, Vec2::ZERO);
        assert_eq!(l[far].target_opacity, LINE_IDLE_OPACITY);
    }
}

#[test]
fn hover_on_edge_rows_is_safe() {
    let mut lines = five_rows();
    let mut rng = StdRng::seed_from_u64(2);
    hover::spike_row(&mut lines, 0, &mut rng);
    hover::spike_row(&mut lines, 4, &mut rng);
    hover::spike_row(&mut lines, 42, &mut rng);
    assert_eq!(lines.lines()[1].target_opacity, NEIGHBOR_OPACITY);
}

#[test]
fn release_resets_targets_but_not_current_values() {
    let mut lines = five_rows();
    let spring = SpringConfig::default();
    let mut rng = StdRng::seed_from_u64(23);
    hover::spike_row(&mut lines, 2, &mut rng);
    for _ in 0..30 {
        lines.step(&spring);
    }
    let before = lines.lines()[2].spike;
    assert_ne!(before, Vec2::ZERO);

    hover::release(&mut lines);
    for l in lines.lines() {
        assert_eq!(l.target_spike, Vec2::ZERO);
        assert_eq!(l.target_opacity, LINE_IDLE_OPACITY);
    }
    assert_eq!(lines.lines()[2].spike, before);

    lines.step(&spring);
    let after = lines.lines()[2].spike;
    assert!(after.length() < before.length());
    assert_ne!(after, Vec2::ZERO);
}

#[test]
fn path_passes_through_both_margins() {
    let mut lines = five_rows();
    lines.get_mut(0).unwrap().spike = Vec2::new(10.0, 5.0);
    let d = lines.lines()[0].path_d(&wide());
    // control points: 120*0.48 + 3.5 = 61.1 and 1800 + 120*0.52 - 3.5 = 1858.9
    assert!(d.starts_with("M 0,100 C 61.1,105 61.1,105 120,100 M 1800,100 C 1858.9,105"));
    assert!(d.ends_with(" 1920,100"));
    assert_eq!(lines.lines()[0].stroke(), "rgba(100,100,100,0.000)");
}
