// Host-side tests for the bubble particle field.

#![allow(dead_code)]
mod bubbles {
    include!("../src/core/bubbles.rs");
}

use bubbles::*;

#[test]
fn bubbles_eventually_spawn_and_rise() {
    let mut field = BubbleField::new(11);
    for _ in 0..500 {
        field.tick(300.0);
    }
    assert!(!field.is_empty(), "no bubble spawned in 500 ticks");
    // Everything that survives sits inside the vertical extent of the bowl.
    for b in field.bubbles() {
        assert!(b.pos.y > -300.0);
        assert!(b.pos.y <= 300.0 * 0.8);
    }
}

#[test]
fn bubbles_are_culled_at_the_top() {
    let mut field = BubbleField::new(12);
    // Long run: every bubble spawned early has long since crossed the top.
    for _ in 0..10_000 {
        field.tick(100.0);
    }
    // Steady state: spawn rate times max travel time bounds the count.
    assert!(field.len() < MAX_BUBBLES);
    for b in field.bubbles() {
        assert!(b.pos.y > -100.0);
    }
}

#[test]
fn spawn_parameters_stay_in_range() {
    let mut field = BubbleField::new(13);
    for _ in 0..2_000 {
        field.tick(200.0);
    }
    for b in field.bubbles() {
        assert!(b.size >= 2.0 && b.size <= 6.0);
        assert!(b.speed >= 1.0 && b.speed <= 3.0);
        assert!(b.pos.x.abs() <= 200.0 * 0.75);
    }
}

#[test]
fn wobble_is_bounded_and_phase_offset() {
    let a = Bubble {
        pos: glam::Vec2::ZERO,
        size: 3.0,
        speed: 1.0,
        wobble_phase: 0.0,
    };
    let b = Bubble {
        wobble_phase: 1.5,
        ..a
    };
    for i in 0..100 {
        let t = i as f64 * 0.1;
        assert!(a.wobble(t).abs() <= 5.0);
    }
    // Different phases desynchronize the sway.
    assert_ne!(a.wobble(1.0), b.wobble(1.0));
}
