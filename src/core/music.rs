use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Saw,
    Triangle,
}

pub const TEMPO_BPM: f32 = 140.0;

// Note frequencies (equal temperament, A4 = 440).
pub const C4: f32 = 261.63;
pub const D4: f32 = 293.66;
pub const E4: f32 = 329.63;
pub const F4: f32 = 349.23;
pub const G4: f32 = 392.00;
pub const A4: f32 = 440.00;
pub const B4: f32 = 493.88;
pub const C5: f32 = 523.25;
pub const G3: f32 = 196.00;
pub const E5: f32 = 659.25;
pub const G5: f32 = 783.99;
pub const C6: f32 = 1046.50;

/// Staccato envelope for the melody voice: attack to the peak, then an
/// exponential decay toward the floor over most of the step.
pub const MELODY_PEAK_GAIN: f32 = 0.1;
pub const MELODY_FLOOR_GAIN: f32 = 0.01;
pub const MELODY_DECAY_PORTION: f64 = 0.9;

/// One sequencer step: a pitch (or rest) held for a number of sixteenths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub freq: Option<f32>,
    pub sixteenths: u32,
}

const fn note(freq: f32, sixteenths: u32) -> Step {
    Step {
        freq: Some(freq),
        sixteenths,
    }
}

const fn rest(sixteenths: u32) -> Step {
    Step {
        freq: None,
        sixteenths,
    }
}

/// Cheerful four-bar loop in C major, square-wave chiptune register.
pub const MELODY: &[Step] = &[
    // Bar 1
    note(E4, 2),
    note(E4, 2),
    rest(2),
    note(E4, 2),
    rest(2),
    note(C4, 2),
    note(E4, 2),
    rest(2),
    // Bar 2
    note(G4, 4),
    rest(4),
    note(G3, 4),
    rest(4),
    // Bar 3
    note(C5, 2),
    rest(1),
    note(G4, 2),
    rest(1),
    note(E4, 2),
    rest(1),
    note(A4, 2),
    rest(1),
    // Bar 4
    note(B4, 2),
    rest(1),
    note(A4, 2),
    note(G4, 2),
    note(E4, 2),
    note(G4, 2),
    note(A4, 4),
];

/// Real-time length of one sixteenth note at the given tempo.
pub fn sixteenth_secs(bpm: f32) -> f64 {
    60.0 / bpm as f64 / 4.0
}

/// A step resolved against the tempo, ready to be voiced and to delay the
/// next reschedule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduledStep {
    pub freq: Option<f32>,
    pub duration: Duration,
}

/// Transport state for the looping melody. The caller owns the actual
/// timer: it voices the step returned by [`Sequencer::next_step`], sleeps
/// for its duration, and asks again, so tests can drive this with a
/// virtual clock and no timers at all.
#[derive(Debug, Default)]
pub struct Sequencer {
    index: usize,
    running: bool,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true only on the stopped-to-running transition, so the
    /// background loop is started exactly once (single-flight).
    pub fn start(&mut self) -> bool {
        if self.running {
            false
        } else {
            self.running = true;
            true
        }
    }

    /// An in-flight step finishes audibly; no further step is produced.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn next_step(&mut self) -> Option<ScheduledStep> {
        if !self.running {
            return None;
        }
        let step = MELODY[self.index % MELODY.len()];
        self.index += 1;
        Some(ScheduledStep {
            freq: step.freq,
            duration: Duration::from_secs_f64(step.sixteenths as f64 * sixteenth_secs(TEMPO_BPM)),
        })
    }
}
