//! Canvas-2D renderer
//!
//! Flat-shape rendering of the world: gradient sky with clouds, pipe pairs
//! with lip caps, a notched ground band, the bird posed by its vertical
//! velocity, and the score HUD. Reads the frame snapshot only.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Renderer;
use crate::sim::Frame;

/// Velocity-to-pose divisor: full dive pose around 350 units/s downward.
const POSE_VELOCITY_SCALE: f64 = 350.0;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    fn draw_background(&self, width: f64, height: f64) {
        let ctx = &self.ctx;

        let sky = ctx.create_linear_gradient(0.0, 0.0, 0.0, height);
        let _ = sky.add_color_stop(0.0, "#8fd8ff");
        let _ = sky.add_color_stop(1.0, "#dff6ff");
        ctx.set_fill_style_canvas_gradient(&sky);
        ctx.fill_rect(0.0, 0.0, width, height);

        // Two cloud clusters
        ctx.set_fill_style_str("rgba(255, 255, 255, 0.8)");
        ctx.begin_path();
        let _ = ctx.arc(80.0, 90.0, 26.0, 0.0, TAU);
        let _ = ctx.arc(104.0, 84.0, 22.0, 0.0, TAU);
        let _ = ctx.arc(128.0, 92.0, 18.0, 0.0, TAU);
        ctx.fill();

        ctx.begin_path();
        let _ = ctx.arc(295.0, 145.0, 22.0, 0.0, TAU);
        let _ = ctx.arc(315.0, 137.0, 18.0, 0.0, TAU);
        let _ = ctx.arc(336.0, 145.0, 16.0, 0.0, TAU);
        ctx.fill();
    }

    fn draw_pipes(&self, frame: &Frame<'_>) {
        let ctx = &self.ctx;
        let t = frame.tuning;
        let pipe_width = t.pipe_width as f64;

        for pipe in frame.pipes {
            let x = pipe.x as f64;
            let top_h = pipe.gap_top as f64;
            let bottom_y = pipe.gap_bottom(t) as f64;
            let bottom_h = t.ground_line() as f64 - bottom_y;

            ctx.set_fill_style_str("#4aa13f");
            ctx.fill_rect(x, 0.0, pipe_width, top_h);
            ctx.fill_rect(x, bottom_y, pipe_width, bottom_h);

            // Lip caps overhang the column by 4 on each side
            ctx.set_fill_style_str("#62bf54");
            ctx.fill_rect(x - 4.0, top_h - 18.0, pipe_width + 8.0, 18.0);
            ctx.fill_rect(x - 4.0, bottom_y, pipe_width + 8.0, 18.0);
        }
    }

    fn draw_ground(&self, frame: &Frame<'_>) {
        let ctx = &self.ctx;
        let t = frame.tuning;
        let width = t.world_width as f64;
        let ground_y = t.ground_line() as f64;

        ctx.set_fill_style_str("#d7b56d");
        ctx.fill_rect(0.0, ground_y, width, t.ground_height as f64);

        ctx.set_fill_style_str("#be9655");
        let mut x = 0.0;
        while x < width {
            ctx.fill_rect(x, ground_y + 8.0, 12.0, 4.0);
            x += 22.0;
        }
    }

    fn draw_bird(&self, frame: &Frame<'_>) {
        let ctx = &self.ctx;
        let bird = frame.bird;
        let r = bird.radius() as f64;

        // Pose follows vertical velocity; pure presentation, the sim knows
        // nothing about it.
        let angle = (bird.vy() as f64 / POSE_VELOCITY_SCALE).clamp(-0.5, 1.1);

        ctx.save();
        let _ = ctx.translate(bird.x() as f64, bird.y() as f64);
        let _ = ctx.rotate(angle);

        // Body
        ctx.set_fill_style_str("#ffdf32");
        ctx.begin_path();
        let _ = ctx.arc(0.0, 0.0, r, 0.0, TAU);
        ctx.fill();

        // Wing
        ctx.set_fill_style_str("#f4c000");
        ctx.begin_path();
        let _ = ctx.ellipse(-4.0, 2.0, 8.0, 6.0, -0.2, 0.0, TAU);
        ctx.fill();

        // Beak
        ctx.set_fill_style_str("#ff8f1f");
        ctx.begin_path();
        ctx.move_to(r - 1.0, 1.0);
        ctx.line_to(r + 12.0, 5.0);
        ctx.line_to(r - 1.0, 10.0);
        ctx.close_path();
        ctx.fill();

        // Eye
        ctx.set_fill_style_str("#0d2230");
        ctx.begin_path();
        let _ = ctx.arc(5.0, -5.0, 2.6, 0.0, TAU);
        ctx.fill();

        ctx.restore();
    }

    fn draw_hud(&self, frame: &Frame<'_>) {
        let ctx = &self.ctx;
        let width = frame.tuning.world_width as f64;

        ctx.set_fill_style_str("#0d2230");
        ctx.set_font("bold 32px Trebuchet MS, sans-serif");
        ctx.set_text_align("center");
        let _ = ctx.fill_text(&frame.score.to_string(), width / 2.0, 56.0);

        ctx.set_font("bold 16px Trebuchet MS, sans-serif");
        ctx.set_text_align("left");
        let _ = ctx.fill_text(&format!("Best: {}", frame.best), 14.0, 30.0);
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, frame: &Frame<'_>) {
        let t = frame.tuning;
        self.draw_background(t.world_width as f64, t.world_height as f64);
        self.draw_pipes(frame);
        self.draw_ground(frame);
        self.draw_bird(frame);
        self.draw_hud(frame);
    }
}
