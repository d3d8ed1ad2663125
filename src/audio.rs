use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::music::{
    self, Sequencer, Waveform, C5, C6, E5, G5, MELODY_DECAY_PORTION, MELODY_FLOOR_GAIN,
    MELODY_PEAK_GAIN,
};

const MASTER_GAIN: f32 = 0.25;
const WIN_ARPEGGIO: [f32; 6] = [C5, E5, G5, C6, G5, C6];
const WIN_NOTE_SPACING: f64 = 0.12;
const MEDAL_FANFARE: [f32; 4] = [C5, E5, G5, C6];
const MEDAL_NOTE_SPACING: f64 = 0.1;
const FINAL_CHORD: [f32; 4] = [C5, E5, G5, C6];

/// One synthesis context and master bus for the whole scene. Cloning is
/// cheap (JS handles); all clones share the sequencer and cancel handle.
///
/// If the synthesis backend is unavailable the engine degrades to a no-op:
/// every method returns quietly and nothing above it needs to care.
#[derive(Clone)]
pub struct AudioEngine {
    ctx: Option<web::AudioContext>,
    master: Option<web::GainNode>,
    sequencer: Rc<RefCell<Sequencer>>,
    pending_step: Rc<RefCell<Option<i32>>>,
}

impl AudioEngine {
    pub fn new() -> Self {
        let ctx = web::AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("AudioContext unavailable - audio disabled");
        }
        let master = ctx.as_ref().and_then(|ctx| match web::GainNode::new(ctx) {
            Ok(g) => {
                g.gain().set_value(MASTER_GAIN);
                _ = g.connect_with_audio_node(&ctx.destination());
                Some(g)
            }
            Err(e) => {
                log::error!("master GainNode error: {:?}", e);
                None
            }
        });
        Self {
            ctx,
            master,
            sequencer: Rc::new(RefCell::new(Sequencer::new())),
            pending_step: Rc::new(RefCell::new(None)),
        }
    }

    /// Resume the context (the platform may have suspended it; never assume
    /// success synchronously) and start the background melody on the first
    /// transition into running.
    pub fn resume(&self) {
        let Some(ctx) = &self.ctx else { return };
        if ctx.state() == web::AudioContextState::Suspended {
            _ = ctx.resume();
        }
        if self.sequencer.borrow_mut().start() {
            log::info!("[audio] melody loop starting");
            run_melody_step(self.clone());
        }
    }

    /// Stop the melody loop: no further step is scheduled; a step already
    /// sounding finishes on its own. Safe to call repeatedly.
    pub fn stop_music(&self) {
        self.sequencer.borrow_mut().stop();
        if let Some(handle) = self.pending_step.borrow_mut().take() {
            if let Some(w) = web::window() {
                w.clear_timeout_with_handle(handle);
            }
        }
    }

    /// Oscillator routed through its own envelope gain into the master bus.
    fn voice(
        &self,
        waveform: Waveform,
        freq: f32,
    ) -> Option<(web::OscillatorNode, web::GainNode)> {
        let ctx = self.ctx.as_ref()?;
        let master = self.master.as_ref()?;
        let osc = web::OscillatorNode::new(ctx).ok()?;
        let gain = web::GainNode::new(ctx).ok()?;
        osc.set_type(osc_web_type(waveform));
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(master).ok()?;
        Some((osc, gain))
    }

    fn now(&self) -> f64 {
        self.ctx.as_ref().map(|c| c.current_time()).unwrap_or(0.0)
    }

    /// High-pitched square "bling" for a caught fish.
    pub fn play_catch(&self) {
        let Some((osc, gain)) = self.voice(Waveform::Square, 900.0) else {
            return;
        };
        let t = self.now();
        _ = osc.frequency().set_value_at_time(900.0, t);
        _ = osc.frequency().linear_ramp_to_value_at_time(1200.0, t + 0.1);
        _ = gain.gain().set_value_at_time(0.1, t);
        _ = gain.gain().linear_ramp_to_value_at_time(0.0, t + 0.1);
        _ = osc.start();
        _ = osc.stop_with_when(t + 0.1);
    }

    /// Short ascending fanfare for a cleared wave; the melody keeps going.
    pub fn play_medal(&self) {
        let t0 = self.now();
        for (i, freq) in MEDAL_FANFARE.iter().enumerate() {
            let Some((osc, gain)) = self.voice(Waveform::Square, *freq) else {
                return;
            };
            let t = t0 + i as f64 * MEDAL_NOTE_SPACING;
            _ = gain.gain().set_value_at_time(0.1, t);
            _ = gain.gain().exponential_ramp_to_value_at_time(0.01, t + 0.2);
            _ = osc.start_with_when(t);
            _ = osc.stop_with_when(t + 0.2);
        }
    }

    /// Synthesized meow: a triangle sweep through a band-pass whose center
    /// tracks the vowel, like a formant.
    pub fn play_meow(&self) {
        let (Some(ctx), Some(master)) = (&self.ctx, &self.master) else {
            return;
        };
        let Ok(osc) = web::OscillatorNode::new(ctx) else {
            return;
        };
        let Ok(filter) = web::BiquadFilterNode::new(ctx) else {
            return;
        };
        let Ok(gain) = web::GainNode::new(ctx) else {
            return;
        };
        let t = ctx.current_time();

        osc.set_type(osc_web_type(Waveform::Triangle));
        _ = osc.connect_with_audio_node(&filter);
        _ = filter.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(master);

        // Pitch rises then settles: m-e-ow.
        _ = osc.frequency().set_value_at_time(400.0, t);
        _ = osc.frequency().linear_ramp_to_value_at_time(800.0, t + 0.1);
        _ = osc.frequency().linear_ramp_to_value_at_time(350.0, t + 0.5);

        filter.set_type(web::BiquadFilterType::Bandpass);
        filter.q().set_value(1.0);
        _ = filter.frequency().set_value_at_time(800.0, t);
        _ = filter.frequency().linear_ramp_to_value_at_time(1400.0, t + 0.15);
        _ = filter.frequency().linear_ramp_to_value_at_time(600.0, t + 0.5);

        _ = gain.gain().set_value_at_time(0.0, t);
        _ = gain.gain().linear_ramp_to_value_at_time(0.3, t + 0.1);
        _ = gain.gain().linear_ramp_to_value_at_time(0.0, t + 0.5);

        _ = osc.start_with_when(t);
        _ = osc.stop_with_when(t + 0.6);
    }

    /// Game-over celebration: silence the melody, play the arpeggio, then
    /// one sustained chord after the fanfare has fully sounded.
    pub fn play_win(&self) {
        self.stop_music();

        let t0 = self.now();
        for (i, freq) in WIN_ARPEGGIO.iter().enumerate() {
            let Some((osc, gain)) = self.voice(Waveform::Square, *freq) else {
                return;
            };
            let t = t0 + i as f64 * WIN_NOTE_SPACING;
            _ = gain.gain().set_value_at_time(0.1, t);
            _ = gain.gain().exponential_ramp_to_value_at_time(0.01, t + 0.1);
            _ = osc.start_with_when(t);
            _ = osc.stop_with_when(t + 0.1);
        }

        let engine = self.clone();
        let chord = Closure::once(move || engine.play_final_chord());
        let delay_ms = (WIN_ARPEGGIO.len() as f64 * WIN_NOTE_SPACING * 1000.0) as i32;
        if let Some(w) = web::window() {
            match w.set_timeout_with_callback_and_timeout_and_arguments_0(
                chord.as_ref().unchecked_ref(),
                delay_ms,
            ) {
                Ok(_) => chord.forget(),
                Err(e) => log::error!("win chord timeout error: {:?}", e),
            }
        }
    }

    fn play_final_chord(&self) {
        let t = self.now();
        for freq in FINAL_CHORD {
            let Some((osc, gain)) = self.voice(Waveform::Triangle, freq) else {
                return;
            };
            _ = gain.gain().set_value_at_time(0.0, t);
            _ = gain.gain().linear_ramp_to_value_at_time(0.1, t + 0.1);
            _ = gain.gain().linear_ramp_to_value_at_time(0.0, t + 2.0);
            _ = osc.start_with_when(t);
            _ = osc.stop_with_when(t + 2.0);
        }
    }
}

impl Default for AudioEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Play the sequencer's next step and arm the timer for the one after it.
/// This is the explicit loop behind the transport: `stop_music` flips the
/// running flag and cancels the armed handle, so nothing further fires.
fn run_melody_step(engine: AudioEngine) {
    let step = match engine.sequencer.borrow_mut().next_step() {
        Some(s) => s,
        None => return,
    };
    let duration = step.duration.as_secs_f64();

    if let Some(freq) = step.freq {
        if let Some((osc, gain)) = engine.voice(Waveform::Square, freq) {
            let t = engine.now();
            _ = gain.gain().set_value_at_time(MELODY_PEAK_GAIN, t);
            _ = gain.gain().exponential_ramp_to_value_at_time(
                MELODY_FLOOR_GAIN,
                t + duration * MELODY_DECAY_PORTION,
            );
            _ = osc.start();
            _ = osc.stop_with_when(t + duration);
        }
    }

    let next = engine.clone();
    let closure = Closure::once(move || {
        next.pending_step.borrow_mut().take();
        run_melody_step(next.clone());
    });
    if let Some(w) = web::window() {
        match w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            (duration * 1000.0) as i32,
        ) {
            Ok(handle) => {
                *engine.pending_step.borrow_mut() = Some(handle);
                closure.forget();
            }
            Err(e) => log::error!("melody reschedule error: {:?}", e),
        }
    }
}

fn osc_web_type(waveform: Waveform) -> web::OscillatorType {
    match waveform {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Square => web::OscillatorType::Square,
        Waveform::Saw => web::OscillatorType::Sawtooth,
        Waveform::Triangle => web::OscillatorType::Triangle,
    }
}

/// Sixteenth-note length the loop is derived from; re-exported for wiring
/// code that wants to log the tempo.
pub fn step_secs() -> f64 {
    music::sixteenth_secs(music::TEMPO_BPM)
}
