use glam::Vec2;
use rand::prelude::*;

use super::distortion::BowlGeometry;

pub const FISH_COUNT: usize = 8;
pub const BASE_FISH_SPEED: f32 = 0.6;
/// Screen-space pointer proximity that counts as a catch, in pixels.
pub const CATCH_RADIUS: f32 = 50.0;
/// Agents steer back toward the center once within this margin of the rim.
pub const BOUNDARY_MARGIN: f32 = 60.0;
/// Seconds without a catch before the bowl is restocked by one agent.
pub const IDLE_RESPAWN_SECS: f64 = 2.0;
/// Hard cap on live agents; idle replenishment never exceeds it.
pub const MAX_FISH: usize = 15;
/// Per-tick chance of picking a new wander heading.
pub const WANDER_PROB: f32 = 0.01;
/// Angular tolerance at which a wander target counts as reached.
pub const HEADING_TOLERANCE: f32 = 0.05;

/// Body and fin colors, in unlock order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPair {
    pub body: &'static str,
    pub fin: &'static str,
}

pub const PALETTE: [ColorPair; 5] = [
    ColorPair { body: "#FF7F50", fin: "#FF4500" }, // coral
    ColorPair { body: "#F0F8FF", fin: "#87CEFA" }, // ice blue
    ColorPair { body: "#FFD700", fin: "#DAA520" }, // gold
    ColorPair { body: "#333333", fin: "#DC143C" }, // black & red
    ColorPair { body: "#DA70D6", fin: "#8A2BE2" }, // orchid
];

/// Slice of the palette usable at a given unlock count: one base color
/// plus one per unlock, capped at the full palette.
pub fn active_palette(unlock_count: usize) -> &'static [ColorPair] {
    let n = PALETTE.len().min(1 + unlock_count);
    &PALETTE[..n]
}

/// One autonomous fish. Position is bowl-local.
#[derive(Clone, Debug)]
pub struct FishAgent {
    pub id: u64,
    pub pos: Vec2,
    pub heading: f32,
    pub speed: f32,
    pub size: f32,
    pub color: ColorPair,
    pub turn_rate: f32,
    /// Desynchronizes tail and fin animation across the population.
    pub phase: f32,
    target_heading: Option<f32>,
    caught: bool,
}

impl FishAgent {
    pub fn is_caught(&self) -> bool {
        self.caught
    }
}

/// Per-tick inputs, threaded explicitly instead of captured.
#[derive(Clone, Copy, Debug)]
pub struct TickContext {
    /// Pointer position in screen coordinates.
    pub pointer: Vec2,
    pub bowl: BowlGeometry,
    /// Seconds since scene start.
    pub now: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Agents caught this tick; each agent is counted at most once ever.
    pub caught: u32,
    /// True exactly once per wave, on the tick whose filter pass empties
    /// the population.
    pub cleared: bool,
}

pub struct Population {
    fish: Vec<FishAgent>,
    rng: StdRng,
    next_id: u64,
    unlock_count: usize,
    cleared_fired: bool,
    last_catch_at: f64,
}

impl Population {
    pub fn new(seed: u64) -> Self {
        Self {
            fish: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            next_id: 0,
            unlock_count: 0,
            cleared_fired: false,
            last_catch_at: 0.0,
        }
    }

    pub fn fish(&self) -> &[FishAgent] {
        &self.fish
    }

    pub fn len(&self) -> usize {
        self.fish.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fish.is_empty()
    }

    /// Widens the palette for future spawns; existing agents keep their
    /// colors.
    pub fn set_unlock_count(&mut self, unlock_count: usize) {
        self.unlock_count = unlock_count;
    }

    pub fn unlock_count(&self) -> usize {
        self.unlock_count
    }

    /// Replace the whole population for a new wave. Agent `i` cycles the
    /// active palette so every unlocked color shows up.
    pub fn respawn(&mut self, bowl_radius: f32, now: f64) {
        let palette = active_palette(self.unlock_count);
        self.fish.clear();
        for i in 0..FISH_COUNT {
            let color = palette[i % palette.len()];
            let agent = self.make_agent(color, bowl_radius * 1.2);
            self.fish.push(agent);
        }
        self.cleared_fired = false;
        self.last_catch_at = now;
    }

    /// Advance the whole population one tick: idle restock, then steer and
    /// catch-test every agent, then filter, then cleared detection. All
    /// catches are counted before any removal so none is double-counted.
    pub fn tick(&mut self, ctx: &TickContext) -> TickReport {
        let mut report = TickReport::default();

        if ctx.now - self.last_catch_at > IDLE_RESPAWN_SECS && self.fish.len() < MAX_FISH {
            let palette = active_palette(self.unlock_count);
            let color = palette[self.rng.gen_range(0..palette.len())];
            let agent = self.make_agent(color, ctx.bowl.radius);
            self.fish.push(agent);
            self.last_catch_at = ctx.now;
        }

        for i in 0..self.fish.len() {
            // Split borrow: steering needs the RNG alongside one agent.
            let (fish, rng) = (&mut self.fish[i], &mut self.rng);
            steer(fish, rng, &ctx.bowl);

            let screen = ctx.bowl.to_screen(fish.pos);
            if !fish.caught && screen.distance(ctx.pointer) < CATCH_RADIUS {
                fish.caught = true;
                report.caught += 1;
                self.last_catch_at = ctx.now;
            }
        }

        self.fish.retain(|f| !f.caught);

        if self.fish.is_empty() && !self.cleared_fired {
            self.cleared_fired = true;
            report.cleared = true;
        }
        report
    }

    fn make_agent(&mut self, color: ColorPair, scatter: f32) -> FishAgent {
        let id = self.next_id;
        self.next_id += 1;
        FishAgent {
            id,
            pos: Vec2::new(
                (self.rng.gen::<f32>() - 0.5) * scatter,
                (self.rng.gen::<f32>() - 0.5) * scatter,
            ),
            heading: self.rng.gen::<f32>() * std::f32::consts::TAU,
            speed: BASE_FISH_SPEED * (0.8 + self.rng.gen::<f32>() * 0.4),
            size: 0.8 + self.rng.gen::<f32>() * 0.4,
            color,
            turn_rate: 0.01 + self.rng.gen::<f32>() * 0.02,
            phase: self.rng.gen::<f32>() * 100.0,
            target_heading: None,
            caught: false,
        }
    }
}

/// Kinematic step plus the two-state steering machine: boundary avoidance
/// when near or past the rim, random-target wandering otherwise.
fn steer(fish: &mut FishAgent, rng: &mut StdRng, bowl: &BowlGeometry) {
    fish.pos += Vec2::new(fish.heading.cos(), fish.heading.sin()) * fish.speed;

    let dist = fish.pos.length();
    let boundary = bowl.radius - BOUNDARY_MARGIN;
    if dist > boundary {
        let to_center = (-fish.pos.y).atan2(-fish.pos.x);
        let diff = wrap_angle(to_center - fish.heading);
        // Fully outside the radius happens right after a shrink; turn
        // harder so the agent re-enters within a bounded number of ticks.
        let urgency = if dist > bowl.radius { 4.0 } else { 2.0 };
        fish.heading += diff.signum() * fish.turn_rate * urgency;
    } else {
        if rng.gen::<f32>() < WANDER_PROB {
            fish.target_heading = Some(fish.heading + (rng.gen::<f32>() - 0.5) * 2.0);
        }
        if let Some(target) = fish.target_heading {
            let diff = wrap_angle(target - fish.heading);
            if diff.abs() < HEADING_TOLERANCE {
                fish.target_heading = None;
            } else {
                fish.heading += diff.signum() * fish.turn_rate;
            }
        }
    }
}

/// Wrap an angle difference into (-pi, pi].
fn wrap_angle(mut diff: f32) -> f32 {
    use std::f32::consts::PI;
    while diff < -PI {
        diff += 2.0 * PI;
    }
    while diff > PI {
        diff -= 2.0 * PI;
    }
    diff
}
