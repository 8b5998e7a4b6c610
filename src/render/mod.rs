//! Presentation surface
//!
//! The simulation never touches a rendering backend directly. `draw_frame`
//! composes one frame from a `GameState` snapshot through the `Surface`
//! trait; the wasm canvas backend lives in `canvas`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::settings::Settings;
use crate::sim::GameState;

/// Sticker-sheet palette of the embedding page
pub mod palette {
    pub const PAPER: &str = "#FFFDF7";
    pub const PINK: &str = "#FF3DB8";
    pub const INK: &str = "#121212";
    pub const DOT: &str = "rgba(255,61,184,0.08)";
    pub const SOFT_SHADOW: &str = "rgba(18,18,18,0.10)";
    pub const GLYPH_SHADOW: &str = "rgba(18,18,18,0.18)";
}

/// HUD text font (heavy weight, matches the page chrome)
pub const HUD_FONT: &str = "1000 14px system-ui";
/// Corner radius of the player sticker box
pub const STICKER_CORNER: f32 = 20.0;
/// Ink outline width around the player sticker
pub const OUTLINE_WIDTH: f32 = 4.0;
/// Glyph used for the falling hazards
pub const HAZARD_GLYPH: &str = "\u{1F4A9}";

/// Dot grid spacing and origin
const DOT_SPACING: f32 = 30.0;
const DOT_ORIGIN: f32 = 18.0;
const DOT_RADIUS: f32 = 2.0;

/// Drawing primitives the simulation's frame needs. Implementations own
/// the backing context and the player sprite asset.
pub trait Surface {
    /// Clear the whole surface
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: &str);
    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: &str);
    fn fill_rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, corner: f32, color: &str);
    fn stroke_rounded_rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        corner: f32,
        color: &str,
        line_width: f32,
    );
    /// Draw the player sprite cover-cropped and clipped into a rounded box
    /// with its ink outline. Returns false when the asset is not ready
    /// (still loading or failed); the caller then draws a placeholder.
    fn draw_player_sprite(&mut self, x: f32, y: f32, w: f32, h: f32, corner: f32) -> bool;
    /// Draw a glyph centered on (cx, cy) at the given pixel size
    fn fill_glyph(&mut self, glyph: &str, cx: f32, cy: f32, size_px: f32, color: &str);
    /// Draw left-aligned text with its baseline at (x, y)
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str);
}

/// Compose one frame from a state snapshot. Issues only `Surface` calls;
/// safe to run in any phase (a static frame after resize, the frozen final
/// frame after game over).
pub fn draw_frame<S: Surface>(surface: &mut S, state: &GameState, settings: &Settings) {
    let (w, h) = (state.width, state.height);

    surface.clear(w, h);
    surface.fill_rect(0.0, 0.0, w, h, palette::PAPER);

    if settings.dot_grid {
        let mut y = DOT_ORIGIN;
        while y < h {
            let mut x = DOT_ORIGIN;
            while x < w {
                surface.fill_circle(x, y, DOT_RADIUS, palette::DOT);
                x += DOT_SPACING;
            }
            y += DOT_SPACING;
        }
    }

    for hazard in &state.hazards {
        let size = (hazard.radius * 2.2).round();
        // Offset ink shadow first, then the glyph itself
        surface.fill_glyph(
            HAZARD_GLYPH,
            hazard.pos.x + 2.0,
            hazard.pos.y + 2.0,
            size,
            palette::GLYPH_SHADOW,
        );
        surface.fill_glyph(
            HAZARD_GLYPH,
            hazard.pos.x,
            hazard.pos.y,
            size,
            palette::INK,
        );
    }

    let player = &state.player;
    let (px, py) = (player.x, player.y(h));
    surface.fill_ellipse(
        px + player.width / 2.0,
        py + player.height + 10.0,
        player.width / 2.1,
        8.0,
        palette::SOFT_SHADOW,
    );
    if !surface.draw_player_sprite(px, py, player.width, player.height, STICKER_CORNER) {
        // Sprite asset not ready: pink sticker placeholder, same outline
        surface.fill_rounded_rect(
            px,
            py,
            player.width,
            player.height,
            STICKER_CORNER,
            palette::PINK,
        );
        surface.stroke_rounded_rect(
            px,
            py,
            player.width,
            player.height,
            STICKER_CORNER,
            palette::INK,
            OUTLINE_WIDTH,
        );
    }

    if settings.show_hud {
        surface.fill_text(
            &format!("Score: {}", state.score),
            14.0,
            24.0,
            HUD_FONT,
            palette::INK,
        );
        surface.fill_text(
            &format!("Best: {}", state.best),
            14.0,
            44.0,
            HUD_FONT,
            palette::INK,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    /// Records every draw call for assertions
    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<String>,
        sprite_ready: bool,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, _w: f32, _h: f32) {
            self.calls.push("clear".into());
        }
        fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, color: &str) {
            self.calls.push(format!("rect {color}"));
        }
        fn fill_circle(&mut self, _cx: f32, _cy: f32, _r: f32, color: &str) {
            self.calls.push(format!("circle {color}"));
        }
        fn fill_ellipse(&mut self, _cx: f32, _cy: f32, _rx: f32, _ry: f32, color: &str) {
            self.calls.push(format!("ellipse {color}"));
        }
        fn fill_rounded_rect(
            &mut self,
            _x: f32,
            _y: f32,
            _w: f32,
            _h: f32,
            _corner: f32,
            color: &str,
        ) {
            self.calls.push(format!("rrect {color}"));
        }
        fn stroke_rounded_rect(
            &mut self,
            _x: f32,
            _y: f32,
            _w: f32,
            _h: f32,
            _corner: f32,
            color: &str,
            _line_width: f32,
        ) {
            self.calls.push(format!("stroke-rrect {color}"));
        }
        fn draw_player_sprite(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _corner: f32) -> bool {
            if self.sprite_ready {
                self.calls.push("sprite".into());
            }
            self.sprite_ready
        }
        fn fill_glyph(&mut self, glyph: &str, _cx: f32, _cy: f32, _size: f32, color: &str) {
            self.calls.push(format!("glyph {glyph} {color}"));
        }
        fn fill_text(&mut self, text: &str, _x: f32, _y: f32, _font: &str, color: &str) {
            self.calls.push(format!("text {text} {color}"));
        }
    }

    fn state() -> GameState {
        GameState::new(1, 980.0, 420.0, Tuning::default())
    }

    #[test]
    fn test_frame_starts_with_clear_and_background() {
        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &state(), &Settings::default());
        assert_eq!(surface.calls[0], "clear");
        assert_eq!(surface.calls[1], format!("rect {}", palette::PAPER));
    }

    #[test]
    fn test_hazards_drawn_shadow_then_ink() {
        let mut s = state();
        s.hazards.push(crate::sim::Hazard::new(
            glam::Vec2::new(100.0, 50.0),
            20.0,
            150.0,
        ));
        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &s, &Settings::default());
        let glyphs: Vec<_> = surface
            .calls
            .iter()
            .filter(|c| c.starts_with("glyph"))
            .collect();
        assert_eq!(glyphs.len(), 2);
        assert!(glyphs[0].contains(palette::GLYPH_SHADOW));
        assert!(glyphs[1].contains(palette::INK));
    }

    #[test]
    fn test_placeholder_when_sprite_not_ready() {
        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &state(), &Settings::default());
        assert!(surface.calls.contains(&format!("rrect {}", palette::PINK)));
        assert!(
            surface
                .calls
                .contains(&format!("stroke-rrect {}", palette::INK))
        );
    }

    #[test]
    fn test_sprite_path_skips_placeholder() {
        let mut surface = RecordingSurface {
            sprite_ready: true,
            ..Default::default()
        };
        draw_frame(&mut surface, &state(), &Settings::default());
        assert!(surface.calls.contains(&"sprite".to_string()));
        assert!(!surface.calls.contains(&format!("rrect {}", palette::PINK)));
    }

    #[test]
    fn test_hud_shows_score_and_best() {
        let mut s = state();
        s.score = 120;
        s.best = 300;
        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &s, &Settings::default());
        assert!(surface.calls.iter().any(|c| c.contains("Score: 120")));
        assert!(surface.calls.iter().any(|c| c.contains("Best: 300")));
    }

    #[test]
    fn test_hud_and_grid_toggles() {
        let settings = Settings {
            show_hud: false,
            dot_grid: false,
            ..Default::default()
        };
        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &state(), &settings);
        assert!(!surface.calls.iter().any(|c| c.starts_with("text")));
        assert!(!surface.calls.iter().any(|c| c.starts_with("circle")));
    }
}
