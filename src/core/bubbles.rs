use glam::Vec2;
use rand::prelude::*;

/// Per-tick chance of spawning one bubble.
pub const SPAWN_PROB: f32 = 0.03;
/// Guard against unbounded growth at pathological frame rates; the
/// spawn/rise balance keeps the steady-state count well under this.
pub const MAX_BUBBLES: usize = 64;

#[derive(Clone, Copy, Debug)]
pub struct Bubble {
    /// Bowl-local position; negative y is up.
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub wobble_phase: f32,
}

impl Bubble {
    /// Lateral sway, phase-locked to this bubble's seed so the field
    /// desynchronizes.
    #[inline]
    pub fn wobble(&self, time: f64) -> f32 {
        ((time * 3.0 + self.wobble_phase as f64).sin() * 5.0) as f32
    }
}

pub struct BubbleField {
    bubbles: Vec<Bubble>,
    rng: StdRng,
}

impl BubbleField {
    pub fn new(seed: u64) -> Self {
        Self {
            bubbles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    /// Stochastic spawn near the bowl floor, deterministic rise, culling
    /// once a bubble leaves the top of the bowl frame.
    pub fn tick(&mut self, bowl_radius: f32) {
        if self.rng.gen::<f32>() < SPAWN_PROB && self.bubbles.len() < MAX_BUBBLES {
            self.bubbles.push(Bubble {
                pos: Vec2::new(
                    (self.rng.gen::<f32>() - 0.5) * bowl_radius * 1.5,
                    bowl_radius * 0.8,
                ),
                size: 2.0 + self.rng.gen::<f32>() * 4.0,
                speed: 1.0 + self.rng.gen::<f32>() * 2.0,
                wobble_phase: self.rng.gen::<f32>() * std::f32::consts::TAU,
            });
        }

        for b in &mut self.bubbles {
            b.pos.y -= b.speed;
        }
        self.bubbles.retain(|b| b.pos.y > -bowl_radius);
    }
}
