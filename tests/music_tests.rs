// Host-side tests for the melody sequencer. The wasm layer owns the
// timers; here a loop standing in for the scheduler drives the transport
// directly.

#![allow(dead_code)]
mod music {
    include!("../src/core/music.rs");
}

use music::*;
use std::time::Duration;

#[test]
fn sixteenth_length_matches_the_tempo() {
    let s = sixteenth_secs(TEMPO_BPM);
    assert!((s - 60.0 / 140.0 / 4.0).abs() < 1e-12);
}

#[test]
fn start_is_single_flight() {
    let mut seq = Sequencer::new();
    assert!(seq.start());
    assert!(!seq.start());
    assert!(seq.is_running());
    seq.stop();
    assert!(!seq.is_running());
    assert!(seq.start());
}

#[test]
fn stopped_sequencer_produces_no_steps() {
    let mut seq = Sequencer::new();
    assert_eq!(seq.next_step(), None);
    seq.start();
    assert!(seq.next_step().is_some());
    seq.stop();
    assert_eq!(seq.next_step(), None);
}

#[test]
fn steps_follow_the_melody_and_wrap() {
    let mut seq = Sequencer::new();
    seq.start();
    let first_pass: Vec<Option<f32>> = (0..MELODY.len())
        .filter_map(|_| seq.next_step())
        .map(|s| s.freq)
        .collect();
    let expected: Vec<Option<f32>> = MELODY.iter().map(|s| s.freq).collect();
    assert_eq!(first_pass, expected);

    // The loop restarts seamlessly from the top.
    let wrapped = seq.next_step().unwrap();
    assert_eq!(wrapped.freq, MELODY[0].freq);
}

#[test]
fn restart_after_stop_resumes_mid_phrase() {
    let mut seq = Sequencer::new();
    seq.start();
    for _ in 0..3 {
        seq.next_step();
    }
    seq.stop();
    seq.start();
    // The transport keeps its position; stopping is a pause, not a rewind.
    assert_eq!(seq.next_step().unwrap().freq, MELODY[3].freq);
}

#[test]
fn step_durations_scale_with_their_sixteenth_counts() {
    let mut seq = Sequencer::new();
    seq.start();
    let sixteenth = sixteenth_secs(TEMPO_BPM);
    for step in MELODY {
        let scheduled = seq.next_step().unwrap();
        let expected = Duration::from_secs_f64(step.sixteenths as f64 * sixteenth);
        assert_eq!(scheduled.duration, expected);
    }
}

#[test]
fn one_full_pass_has_a_fixed_length() {
    let mut seq = Sequencer::new();
    seq.start();
    let total: f64 = (0..MELODY.len())
        .filter_map(|_| seq.next_step())
        .map(|s| s.duration.as_secs_f64())
        .sum();
    let sixteenths: u32 = MELODY.iter().map(|s| s.sixteenths).sum();
    let expected = sixteenths as f64 * sixteenth_secs(TEMPO_BPM);
    // Each step is quantized to whole nanoseconds, so the sum drifts a few
    // nanoseconds from the nominal total.
    assert!((total - expected).abs() < 1e-6, "total {total}");
    // Roughly six seconds of loop at 140 BPM.
    assert!(total > 6.0 && total < 7.0, "loop length drifted: {total}");
}

#[test]
fn the_melody_contains_rests() {
    assert!(MELODY.iter().any(|s| s.freq.is_none()));
    assert!(MELODY.iter().any(|s| s.freq.is_some()));
}
