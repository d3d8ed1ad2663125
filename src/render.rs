use glam::Vec2;
use web_sys as web;

use crate::constants::*;
use crate::core::bubbles::Bubble;
use crate::core::distortion::{displace, BowlGeometry, RippleParams};
use crate::core::fish::FishAgent;

/// Inputs for one drawn frame. Everything here is read-only; the
/// simulation has already been advanced by the time this is built.
pub struct SceneFrame<'a> {
    pub bowl: BowlGeometry,
    /// Pointer position in canvas pixels.
    pub pointer: Vec2,
    /// Seconds since scene start.
    pub time: f64,
    pub fish: &'a [FishAgent],
    pub bubbles: &'a [Bubble],
}

/// Draws the bowl scene onto a 2D canvas context in a strict order:
/// water disk, caustics, bubbles, fish (clipped to the bowl), highlights.
/// Every visible vertex goes through the distortion field so the whole
/// scene refracts together.
pub struct SceneRenderer {
    ctx: web::CanvasRenderingContext2d,
    params: RippleParams,
}

impl SceneRenderer {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            params: RippleParams::default(),
        }
    }

    pub fn draw(&self, frame: &SceneFrame, canvas_width: f64, canvas_height: f64) {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, canvas_width, canvas_height);

        let sway = Vec2::new(
            ((frame.time * SWAY_FREQ_X).sin() * SWAY_AMPLITUDE) as f32,
            ((frame.time * SWAY_FREQ_Y).cos() * SWAY_AMPLITUDE) as f32,
        );

        self.draw_water(frame, sway);
        self.draw_caustics(frame, sway);
        self.draw_bubbles(frame);
        self.draw_fish_clipped(frame);
        self.draw_highlights(frame, sway);
    }

    #[inline]
    fn displaced(&self, frame: &SceneFrame, p: Vec2) -> Vec2 {
        displace(p, frame.pointer, frame.time, frame.bowl.radius, &self.params)
    }

    fn draw_water(&self, frame: &SceneFrame, sway: Vec2) {
        let ctx = &self.ctx;
        let c = frame.bowl.center;
        let r = frame.bowl.radius;

        if let Ok(gradient) = ctx.create_radial_gradient(
            c.x as f64,
            (c.y - r * 0.4) as f64,
            (r * 0.1) as f64,
            c.x as f64,
            c.y as f64,
            r as f64,
        ) {
            for (offset, color) in WATER_STOPS {
                _ = gradient.add_color_stop(offset as f32, color);
            }
            ctx.set_fill_style_canvas_gradient(&gradient);
        }

        ctx.begin_path();
        _ = ctx.arc(
            (c.x + sway.x) as f64,
            (c.y + sway.y) as f64,
            r as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();

        ctx.set_stroke_style_str(RIM_STROKE);
        ctx.set_line_width(RIM_LINE_WIDTH);
        ctx.stroke();
    }

    /// Two layered line grids, each sample displaced, giving a cross-hatch
    /// of refracted light on the water.
    fn draw_caustics(&self, frame: &SceneFrame, sway: Vec2) {
        let ctx = &self.ctx;
        let c = frame.bowl.center + sway;
        let r = frame.bowl.radius;
        let t = frame.time as f32;

        ctx.save();
        ctx.begin_path();
        _ = ctx.arc(
            c.x as f64,
            c.y as f64,
            r as f64 * CAUSTIC_CLIP_RATIO,
            0.0,
            std::f64::consts::TAU,
        );
        _ = ctx.clip();

        ctx.set_stroke_style_str(CAUSTIC_STROKE);
        ctx.set_line_width(CAUSTIC_LINE_WIDTH);

        let row_step = r * CAUSTIC_ROW_RATIO;

        // Horizontal-ish layer.
        ctx.begin_path();
        let mut y = -r;
        while y < r {
            let mut x = -r;
            while x < r {
                let p = Vec2::new(
                    c.x + x,
                    c.y + y + (x * CAUSTIC_WAVE_FREQ + t).sin() * CAUSTIC_WAVE_AMPLITUDE,
                );
                let d = self.displaced(frame, p);
                if x == -r {
                    ctx.move_to(d.x as f64, d.y as f64);
                } else {
                    ctx.line_to(d.x as f64, d.y as f64);
                }
                x += CAUSTIC_SAMPLE_STEP;
            }
            y += row_step;
        }
        ctx.stroke();

        // Vertical-ish layer, swaying at a slightly different rate.
        ctx.begin_path();
        let mut x = -r;
        while x < r {
            let mut y = -r;
            while y < r {
                let p = Vec2::new(
                    c.x + x + (y * CAUSTIC_WAVE_FREQ + t * 1.3).sin() * CAUSTIC_WAVE_AMPLITUDE,
                    c.y + y,
                );
                let d = self.displaced(frame, p);
                if y == -r {
                    ctx.move_to(d.x as f64, d.y as f64);
                } else {
                    ctx.line_to(d.x as f64, d.y as f64);
                }
                y += CAUSTIC_SAMPLE_STEP;
            }
            x += row_step;
        }
        ctx.stroke();
        ctx.restore();
    }

    fn draw_bubbles(&self, frame: &SceneFrame) {
        let ctx = &self.ctx;
        ctx.set_line_width(1.0);
        ctx.set_stroke_style_str(BUBBLE_STROKE);

        for b in frame.bubbles {
            let screen = frame.bowl.to_screen(b.pos) + Vec2::new(b.wobble(frame.time), 0.0);
            let d = self.displaced(frame, screen);

            ctx.set_fill_style_str(BUBBLE_FILL);
            ctx.begin_path();
            _ = ctx.arc(
                d.x as f64,
                d.y as f64,
                b.size as f64,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.fill();
            ctx.stroke();

            ctx.set_fill_style_str(BUBBLE_GLINT);
            ctx.begin_path();
            _ = ctx.arc(
                (d.x - b.size * 0.3) as f64,
                (d.y - b.size * 0.3) as f64,
                (b.size * 0.2) as f64,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.fill();
        }
    }

    fn draw_fish_clipped(&self, frame: &SceneFrame) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.begin_path();
        _ = ctx.arc(
            frame.bowl.center.x as f64,
            frame.bowl.center.y as f64,
            frame.bowl.radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        _ = ctx.clip();
        for fish in frame.fish {
            self.draw_fish(frame, fish);
        }
        ctx.restore();
    }

    fn draw_fish(&self, frame: &SceneFrame, fish: &FishAgent) {
        let ctx = &self.ctx;
        let screen = frame.bowl.to_screen(fish.pos);
        let (sin, cos) = fish.heading.sin_cos();
        let bowl_scale = FISH_SCALE_BASE + frame.bowl.radius / FISH_SCALE_RADIUS_DIVISOR;
        let scale = bowl_scale * fish.size;

        // Rotate a body-local point by the heading, project to screen and
        // refract it; every feature of the fish goes through here.
        let t = |lx: f32, ly: f32| -> Vec2 {
            let rotated = Vec2::new(lx * cos - ly * sin, lx * sin + ly * cos) * scale;
            self.displaced(frame, screen + rotated)
        };

        // Body silhouette.
        ctx.set_fill_style_str(fish.color.body);
        let nose = t(BODY_LEN, 0.0);
        let tail_base = t(-BODY_LEN, 0.0);
        let top = t(0.0, -BODY_WIDTH);
        let bottom = t(0.0, BODY_WIDTH);
        let top_front = t(BODY_LEN * 0.6, -BODY_WIDTH * 0.7);
        let top_back = t(-BODY_LEN * 0.6, -BODY_WIDTH * 0.7);
        let bot_front = t(BODY_LEN * 0.6, BODY_WIDTH * 0.7);
        let bot_back = t(-BODY_LEN * 0.6, BODY_WIDTH * 0.7);

        ctx.begin_path();
        ctx.move_to(nose.x as f64, nose.y as f64);
        ctx.bezier_curve_to(
            top_front.x as f64,
            top_front.y as f64,
            top.x as f64,
            top.y as f64,
            top_back.x as f64,
            top_back.y as f64,
        );
        ctx.line_to(tail_base.x as f64, tail_base.y as f64);
        ctx.bezier_curve_to(
            bot_back.x as f64,
            bot_back.y as f64,
            bottom.x as f64,
            bottom.y as f64,
            bot_front.x as f64,
            bot_front.y as f64,
        );
        ctx.close_path();
        ctx.fill();

        // Tail, beating on this fish's own phase.
        let wiggle =
            ((frame.time * TAIL_BEAT_HZ + fish.phase as f64).sin() as f32) * TAIL_BEAT_AMPLITUDE;
        let tip_top = t(-BODY_LEN - TAIL_LEN, -TAIL_WIDTH + wiggle);
        let tip_bot = t(-BODY_LEN - TAIL_LEN, TAIL_WIDTH + wiggle);
        let tail_mid = t(-BODY_LEN - TAIL_LEN * 0.8, wiggle * 0.5);

        ctx.set_fill_style_str(fish.color.fin);
        ctx.begin_path();
        ctx.move_to(tail_base.x as f64, tail_base.y as f64);
        ctx.quadratic_curve_to(
            tail_mid.x as f64,
            tail_mid.y as f64,
            tip_top.x as f64,
            tip_top.y as f64,
        );
        ctx.line_to(tip_bot.x as f64, tip_bot.y as f64);
        ctx.quadratic_curve_to(
            tail_mid.x as f64,
            tail_mid.y as f64,
            tail_base.x as f64,
            tail_base.y as f64,
        );
        ctx.fill();

        // Side fins, counter-phased to the tail.
        let fin_wiggle =
            ((frame.time * FIN_BEAT_HZ + fish.phase as f64).cos() as f32) * FIN_BEAT_AMPLITUDE;
        for side in [1.0f32, -1.0] {
            let root = t(5.0, side * BODY_WIDTH * 0.8);
            let tip = t(0.0, side * (BODY_WIDTH * 0.8 + 12.0 + fin_wiggle));
            let back = t(10.0, side * (BODY_WIDTH * 0.8 + 8.0 + fin_wiggle));
            ctx.begin_path();
            ctx.move_to(root.x as f64, root.y as f64);
            ctx.line_to(tip.x as f64, tip.y as f64);
            ctx.line_to(back.x as f64, back.y as f64);
            ctx.fill();
        }

        // Eyes.
        for side in [1.0f32, -1.0] {
            let eye = t(EYE_X, side * EYE_Y);
            ctx.set_fill_style_str("white");
            ctx.begin_path();
            _ = ctx.arc(
                eye.x as f64,
                eye.y as f64,
                (EYE_SIZE * bowl_scale) as f64,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.fill();

            let pupil = t(EYE_X + 2.0, side * EYE_Y);
            ctx.set_fill_style_str("black");
            ctx.begin_path();
            _ = ctx.arc(
                pupil.x as f64,
                pupil.y as f64,
                (EYE_SIZE * bowl_scale / 2.5) as f64,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.fill();
        }
    }

    /// Static glass sheen and rim glints, swaying with the container.
    fn draw_highlights(&self, frame: &SceneFrame, sway: Vec2) {
        let ctx = &self.ctx;
        let c = frame.bowl.center;
        let r = frame.bowl.radius as f64;

        ctx.save();
        _ = ctx.translate(sway.x as f64, sway.y as f64);

        ctx.begin_path();
        _ = ctx.ellipse(
            c.x as f64,
            (c.y - frame.bowl.radius * 0.6) as f64,
            r * 0.5,
            r * 0.15,
            0.0,
            std::f64::consts::PI,
            std::f64::consts::TAU,
        );
        ctx.set_fill_style_str(SHEEN_FILL);
        ctx.fill();

        ctx.set_line_cap("round");

        ctx.begin_path();
        _ = ctx.arc(c.x as f64, c.y as f64, r * 0.92, 3.5, 5.5);
        ctx.set_stroke_style_str(GLINT_PRIMARY);
        ctx.set_line_width(15.0);
        ctx.stroke();

        ctx.begin_path();
        _ = ctx.arc(c.x as f64, c.y as f64, r * 0.92, 0.5, 1.5);
        ctx.set_stroke_style_str(GLINT_SECONDARY);
        ctx.set_line_width(10.0);
        ctx.stroke();

        ctx.restore();
    }
}
