// Render-side tuning for the bowl scene. Simulation constants live with
// their core modules; these only shape how things are drawn.

// Water gradient stops, inner to outer.
pub const WATER_STOPS: [(f64, &str); 4] = [
    (0.0, "#E0F7FA"),
    (0.3, "#81D4FA"),
    (0.7, "#29B6F6"),
    (1.0, "#0277BD"),
];

// Slow container sway applied to the background disk and highlights.
pub const SWAY_AMPLITUDE: f64 = 2.0;
pub const SWAY_FREQ_X: f64 = 0.5;
pub const SWAY_FREQ_Y: f64 = 0.6;

// Caustic cross-hatch grid.
pub const CAUSTIC_STROKE: &str = "rgba(255, 255, 255, 0.15)";
pub const CAUSTIC_LINE_WIDTH: f64 = 1.5;
pub const CAUSTIC_ROW_RATIO: f32 = 0.12; // coarse spacing as a radius fraction
pub const CAUSTIC_SAMPLE_STEP: f32 = 15.0; // fine sampling along each line
pub const CAUSTIC_WAVE_AMPLITUDE: f32 = 20.0;
pub const CAUSTIC_WAVE_FREQ: f32 = 0.03;
pub const CAUSTIC_CLIP_RATIO: f64 = 0.95;

// Bubble styling.
pub const BUBBLE_FILL: &str = "rgba(255, 255, 255, 0.4)";
pub const BUBBLE_STROKE: &str = "rgba(255, 255, 255, 0.6)";
pub const BUBBLE_GLINT: &str = "rgba(255, 255, 255, 0.8)";

// Fish silhouette control dimensions, in unscaled local units.
pub const BODY_LEN: f32 = 25.0;
pub const BODY_WIDTH: f32 = 15.0;
pub const TAIL_LEN: f32 = 20.0;
pub const TAIL_WIDTH: f32 = 15.0;
pub const TAIL_BEAT_HZ: f64 = 6.0;
pub const TAIL_BEAT_AMPLITUDE: f32 = 10.0;
pub const FIN_BEAT_HZ: f64 = 8.0;
pub const FIN_BEAT_AMPLITUDE: f32 = 5.0;
pub const EYE_X: f32 = 12.0;
pub const EYE_Y: f32 = -6.0;
pub const EYE_SIZE: f32 = 6.0;

// Keeps fish proportional across bowl sizes without letting them vanish.
pub const FISH_SCALE_BASE: f32 = 0.6;
pub const FISH_SCALE_RADIUS_DIVISOR: f32 = 600.0;

// Glass rim and highlights.
pub const RIM_STROKE: &str = "rgba(255, 255, 255, 0.3)";
pub const RIM_LINE_WIDTH: f64 = 4.0;
pub const SHEEN_FILL: &str = "rgba(255, 255, 255, 0.1)";
pub const GLINT_PRIMARY: &str = "rgba(255, 255, 255, 0.15)";
pub const GLINT_SECONDARY: &str = "rgba(255, 255, 255, 0.08)";

// Celebration pause before the next wave spawns, per the shell contract.
pub const WAVE_ADVANCE_DELAY_MS: i32 = 4000;
