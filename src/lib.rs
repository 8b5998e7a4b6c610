//! Pancho Dodge - steer Pancho, dodge the falling hazards
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collision, game state)
//! - `render`: Presentation surface trait and frame composition
//! - `tuning`: Data-driven game balance
//! - `settings`: Presentation preferences (HUD, FPS counter, background)
//!
//! The simulation is driven by a single frame callback on wasm and by a
//! fixed-step headless driver on native. All gameplay state lives in one
//! `sim::GameState` mutated in place by `sim::tick`.

pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Maximum delta-time integrated in one tick (seconds). Real elapsed
    /// time beyond this is dropped so a backgrounded tab can't blow up
    /// the simulation on resume.
    pub const MAX_TICK_DT: f32 = 0.033;

    /// Playfield dimensions. Width follows the host, capped; height is fixed.
    pub const MAX_SURFACE_WIDTH: f32 = 980.0;
    pub const SURFACE_HEIGHT: f32 = 420.0;

    /// Player sprite box
    pub const PLAYER_WIDTH: f32 = 80.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    /// Horizontal clamp margin from each playfield edge
    pub const EDGE_MARGIN: f32 = 10.0;
    /// Gap between the player box and the bottom of the playfield
    pub const PLAYER_BOTTOM_GAP: f32 = 18.0;

    /// Keyboard steering speed (pixels/second)
    pub const KEY_MOVE_SPEED: f32 = 420.0;
    /// Pointer-follow easing: fraction of remaining distance covered per tick
    pub const FOLLOW_EASING: f32 = 0.2;

    /// Hazard radius range at spawn (pixels)
    pub const HAZARD_RADIUS_MIN: f32 = 18.0;
    pub const HAZARD_RADIUS_MAX: f32 = 24.0;
    /// Hazard fall speed range at spawn (pixels/second, before difficulty)
    pub const HAZARD_SPEED_MIN: f32 = 140.0;
    pub const HAZARD_SPEED_MAX: f32 = 220.0;
    /// Hazards spawn above the visible playfield
    pub const HAZARD_SPAWN_Y: f32 = -40.0;
    /// Extra horizontal inset (beyond the radius) from each edge at spawn
    pub const SPAWN_EDGE_INSET: f32 = 12.0;
    /// A hazard is culled once fully below the playfield by this margin
    pub const DESPAWN_MARGIN: f32 = 70.0;

    /// Spawn cadence: starts at BASE seconds, shrinks by elapsed/RAMP,
    /// floored at MIN
    pub const SPAWN_CADENCE_BASE: f32 = 0.85;
    pub const SPAWN_CADENCE_MIN: f32 = 0.28;
    pub const SPAWN_CADENCE_RAMP: f32 = 30.0;

    /// Difficulty factor = 1 + elapsed / DIFFICULTY_RAMP_SECS
    pub const DIFFICULTY_RAMP_SECS: f32 = 25.0;

    /// Score accrues at floor(SCORE_RATE * dt) points per tick
    pub const SCORE_RATE: f32 = 60.0;
}
