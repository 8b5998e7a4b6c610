//! 2D canvas backend for the presentation surface (wasm32 only)
//!
//! Wraps a `CanvasRenderingContext2d` plus the player sprite image. Path
//! drawing calls return `Result` on the web-sys side; failures are ignored
//! with `.ok()` since a bad path op just skips one shape for one frame.

use std::f64::consts::TAU;

use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::{OUTLINE_WIDTH, Surface, palette};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    sprite: HtmlImageElement,
    /// Logged the degraded sprite path already
    warned_sprite: bool,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d, sprite: HtmlImageElement) -> Self {
        Self {
            ctx,
            sprite,
            warned_sprite: false,
        }
    }

    /// Sprite readiness: `complete` is also set on load failure, so the
    /// natural width check covers both still-loading and broken assets.
    fn sprite_ready(&self) -> bool {
        self.sprite.complete() && self.sprite.natural_width() > 0
    }

    /// Trace a rounded rectangle path (radius clamped to the half-extents)
    fn trace_rounded_rect(&self, x: f64, y: f64, w: f64, h: f64, r: f64) {
        let rr = r.min(w / 2.0).min(h / 2.0);
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(x + rr, y);
        ctx.arc_to(x + w, y, x + w, y + h, rr).ok();
        ctx.arc_to(x + w, y + h, x, y + h, rr).ok();
        ctx.arc_to(x, y + h, x, y, rr).ok();
        ctx.arc_to(x, y, x + w, y, rr).ok();
        ctx.close_path();
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx.arc(cx as f64, cy as f64, r as f64, 0.0, TAU).ok();
        self.ctx.fill();
    }

    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx
            .ellipse(cx as f64, cy as f64, rx as f64, ry as f64, 0.0, 0.0, TAU)
            .ok();
        self.ctx.fill();
    }

    fn fill_rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, corner: f32, color: &str) {
        self.trace_rounded_rect(x as f64, y as f64, w as f64, h as f64, corner as f64);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }

    fn stroke_rounded_rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        corner: f32,
        color: &str,
        line_width: f32,
    ) {
        self.trace_rounded_rect(x as f64, y as f64, w as f64, h as f64, corner as f64);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
    }

    fn draw_player_sprite(&mut self, x: f32, y: f32, w: f32, h: f32, corner: f32) -> bool {
        if !self.sprite_ready() {
            if !self.warned_sprite {
                log::warn!("Player sprite not ready; drawing placeholder");
                self.warned_sprite = true;
            }
            return false;
        }

        // Cover-crop: scale to fill the box without distortion, center the
        // overflow, clip to the sticker's rounded corners
        let iw = self.sprite.natural_width() as f64;
        let ih = self.sprite.natural_height() as f64;
        let (x, y, w, h) = (x as f64, y as f64, w as f64, h as f64);
        let scale = (w / iw).max(h / ih);
        let dw = iw * scale;
        let dh = ih * scale;
        let dx = x + (w - dw) / 2.0;
        let dy = y + (h - dh) / 2.0;

        self.ctx.save();
        self.trace_rounded_rect(x, y, w, h, corner as f64);
        self.ctx.clip();
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(&self.sprite, dx, dy, dw, dh)
            .ok();
        self.ctx.restore();

        self.ctx.set_stroke_style_str(palette::INK);
        self.ctx.set_line_width(OUTLINE_WIDTH as f64);
        self.trace_rounded_rect(x, y, w, h, corner as f64);
        self.ctx.stroke();
        true
    }

    fn fill_glyph(&mut self, glyph: &str, cx: f32, cy: f32, size_px: f32, color: &str) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_font(&format!(
            "900 {}px system-ui, \"Apple Color Emoji\", \"Segoe UI Emoji\"",
            size_px.round()
        ));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_fill_style_str(color);
        ctx.fill_text(glyph, cx as f64, cy as f64).ok();
        ctx.restore();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str) {
        self.ctx.set_font(font);
        self.ctx.set_text_align("left");
        self.ctx.set_text_baseline("alphabetic");
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_text(text, x as f64, y as f64).ok();
    }
}
