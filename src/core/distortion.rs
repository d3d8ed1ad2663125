use glam::Vec2;

/// Bowl radius as a fraction of the smaller viewport dimension.
pub const BOWL_RADIUS_RATIO: f32 = 0.42;
/// Floor for degenerate viewports; geometry must never go non-positive.
pub const MIN_BOWL_RADIUS: f32 = 40.0;

/// Circular play boundary. Agents and bubbles live in bowl-local
/// coordinates (origin at `center`) and are projected to screen space
/// only at draw time, so a resize just swaps this frame out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BowlGeometry {
    pub center: Vec2,
    pub radius: f32,
}

impl BowlGeometry {
    pub fn from_viewport(width: f32, height: f32) -> Self {
        let radius = (width.min(height) * BOWL_RADIUS_RATIO).max(MIN_BOWL_RADIUS);
        Self {
            center: Vec2::new(width * 0.5, height * 0.5),
            radius,
        }
    }

    #[inline]
    pub fn to_screen(&self, local: Vec2) -> Vec2 {
        self.center + local
    }
}

/// Tuning for the water displacement field.
#[derive(Clone, Copy, Debug)]
pub struct RippleParams {
    /// Amplitude of the always-on traveling wave, in pixels.
    pub ambient_strength: f32,
    pub ambient_spatial_freq: f32,
    pub ambient_time_freq: f32,
    /// Ripple cutoff as a fraction of the bowl radius.
    pub radius_ratio: f32,
    /// Peak radial displacement at the pointer, in pixels.
    pub strength: f32,
    /// Spatial frequency of the outward-traveling wavefront.
    pub frequency: f32,
    /// Phase speed of the wavefront in radians per second.
    pub speed: f32,
    /// Exponent concentrating the effect near the pointer.
    pub falloff_power: f32,
}

impl Default for RippleParams {
    fn default() -> Self {
        Self {
            ambient_strength: 5.0,
            ambient_spatial_freq: 0.008,
            ambient_time_freq: 0.8,
            radius_ratio: 0.7,
            strength: 80.0,
            frequency: 0.12,
            speed: 8.0,
            falloff_power: 3.0,
        }
    }
}

/// Displace a screen-space point through the water field: an ambient
/// traveling wave plus a pointer-centered radial ripple.
///
/// Pure and deterministic; it is called once per drawn vertex and every
/// caller must see the same field for the frame to stay coherent.
pub fn displace(p: Vec2, pointer: Vec2, time: f64, radius: f32, params: &RippleParams) -> Vec2 {
    let t = time as f32;
    let ambient = Vec2::new(
        (p.y * params.ambient_spatial_freq + t * params.ambient_time_freq).sin(),
        (p.x * params.ambient_spatial_freq + t * params.ambient_time_freq).cos(),
    ) * params.ambient_strength;
    let mut out = p + ambient;

    let delta = p - pointer;
    let dist = delta.length();
    let cutoff = radius * params.radius_ratio;
    if dist < cutoff {
        let falloff = (1.0 - dist / cutoff).powf(params.falloff_power);
        let wave = (dist * params.frequency - t * params.speed).sin();
        // At the exact pointer position there is no radial direction;
        // leave the point ambient-only rather than divide by ~0.
        if dist > 0.1 {
            out += delta / dist * (wave * params.strength * falloff);
        }
    }
    out
}
