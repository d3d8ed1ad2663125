// Host-side tests for the water displacement field.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod distortion {
    include!("../src/core/distortion.rs");
}

use distortion::*;
use glam::Vec2;

const FAR_AWAY: Vec2 = Vec2::new(-10_000.0, -10_000.0);

#[test]
fn displacement_is_deterministic() {
    let p = Vec2::new(120.0, -40.0);
    let pointer = Vec2::new(100.0, 0.0);
    let params = RippleParams::default();
    let a = displace(p, pointer, 1.25, 300.0, &params);
    let b = displace(p, pointer, 1.25, 300.0, &params);
    assert_eq!(a, b);
}

#[test]
fn points_beyond_cutoff_see_only_the_ambient_wave() {
    let p = Vec2::new(0.0, 0.0);
    let params = RippleParams::default();
    let radius = 300.0;
    // Two pointers both beyond the cutoff must yield identical output.
    let near_edge = Vec2::new(radius * params.radius_ratio + 1.0, 0.0);
    let a = displace(p, near_edge, 0.7, radius, &params);
    let b = displace(p, FAR_AWAY, 0.7, radius, &params);
    assert_eq!(a, b);
}

#[test]
fn point_under_the_pointer_gets_no_radial_kick() {
    let p = Vec2::new(50.0, 50.0);
    let params = RippleParams::default();
    let at_pointer = displace(p, p, 2.0, 300.0, &params);
    let ambient_only = displace(p, FAR_AWAY, 2.0, 300.0, &params);
    assert_eq!(at_pointer, ambient_only);
}

#[test]
fn ripple_magnitude_is_bounded_by_strength_plus_ambient() {
    let params = RippleParams::default();
    let pointer = Vec2::new(0.0, 0.0);
    let bound = (params.strength + params.ambient_strength * 2.0) as f32;
    for i in 0..200 {
        let angle = i as f32 * 0.17;
        let r = (i as f32 * 0.9) % 200.0;
        let p = Vec2::new(angle.cos(), angle.sin()) * r;
        let out = displace(p, pointer, i as f64 * 0.05, 300.0, &params);
        assert!(
            (out - p).length() <= bound,
            "excessive displacement at {p:?}: {out:?}"
        );
    }
}

#[test]
fn displacement_is_continuous_in_time() {
    let p = Vec2::new(80.0, 30.0);
    let pointer = Vec2::new(60.0, 40.0);
    let params = RippleParams::default();
    let a = displace(p, pointer, 1.000, 300.0, &params);
    let b = displace(p, pointer, 1.001, 300.0, &params);
    assert!((a - b).length() < 1.0, "jump between adjacent frames");
}

#[test]
fn bowl_radius_never_degenerates() {
    let tiny = BowlGeometry::from_viewport(10.0, 10.0);
    assert_eq!(tiny.radius, MIN_BOWL_RADIUS);

    let normal = BowlGeometry::from_viewport(1000.0, 800.0);
    assert_eq!(normal.radius, 800.0 * BOWL_RADIUS_RATIO);
    assert_eq!(normal.center, Vec2::new(500.0, 400.0));
}

#[test]
fn to_screen_translates_by_center() {
    let bowl = BowlGeometry::from_viewport(600.0, 400.0);
    let screen = bowl.to_screen(Vec2::new(10.0, -20.0));
    assert_eq!(screen, Vec2::new(310.0, 180.0));
}
