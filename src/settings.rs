//! Presentation preferences
//!
//! Purely cosmetic toggles, never persisted. The embedding page can supply
//! overrides through a `data-settings` JSON attribute on the canvas.

use serde::{Deserialize, Serialize};

/// Presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === HUD ===
    /// Draw the in-canvas score/best text
    pub show_hud: bool,
    /// Show the FPS counter in the page HUD
    pub show_fps: bool,

    // === Background ===
    /// Draw the decorative dot grid behind the playfield
    pub dot_grid: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_hud: true,
            show_fps: true,
            dot_grid: true,
        }
    }
}

impl Settings {
    /// Parse a settings override blob, falling back to defaults on error.
    pub fn from_json_str(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|e| {
            log::warn!("Failed to parse settings JSON ({e}); using defaults");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert!(s.show_hud);
        assert!(s.dot_grid);
    }

    #[test]
    fn test_partial_override() {
        let s = Settings::from_json_str(r#"{"dot_grid": false}"#);
        assert!(!s.dot_grid);
        assert!(s.show_hud);
    }
}
