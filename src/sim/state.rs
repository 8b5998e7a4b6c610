//! Game state and core simulation types
//!
//! One run's worth of mutable state lives in `GameState`, owned by the loop
//! driver and mutated in place by `tick`. Nothing here is persisted; the
//! best score survives restarts only within the session.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first start input
    Idle,
    /// Active gameplay
    Playing,
    /// Run ended (collision or manual quit); restart returns to Playing
    Over,
}

/// Hazard variants. Only one exists today; the enum keeps the spawn and
/// draw paths ready for more without a shape change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardKind {
    Dropping,
}

/// A falling hazard entity
#[derive(Debug, Clone)]
pub struct Hazard {
    /// Circle center
    pub pos: Vec2,
    pub radius: f32,
    /// Fall speed (px/s), fixed at spawn; difficulty does not retroactively
    /// change hazards already in flight
    pub fall_speed: f32,
    pub kind: HazardKind,
}

impl Hazard {
    pub fn new(pos: Vec2, radius: f32, fall_speed: f32) -> Self {
        Self {
            pos,
            radius,
            fall_speed,
            kind: HazardKind::Dropping,
        }
    }
}

/// The player entity. Only x is independently mutable; y is derived from
/// the surface height every tick.
#[derive(Debug, Clone)]
pub struct Player {
    /// Left edge x
    pub x: f32,
    /// Horizontal velocity (px/s), informational outside discrete steering
    pub vx: f32,
    pub width: f32,
    pub height: f32,
}

impl Player {
    pub fn new(surface_width: f32) -> Self {
        let mut player = Self {
            x: 0.0,
            vx: 0.0,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
        };
        player.center_on(surface_width);
        player
    }

    /// Derived top edge y for the given surface height
    #[inline]
    pub fn y(&self, surface_height: f32) -> f32 {
        surface_height - self.height - PLAYER_BOTTOM_GAP
    }

    /// Axis-aligned hitbox for collision tests
    pub fn hitbox(&self, surface_height: f32) -> Rect {
        Rect::new(self.x, self.y(surface_height), self.width, self.height)
    }

    /// Clamp x into `[margin, width - player_width - margin]`. The upper
    /// bound is floored at the margin so a transiently tiny surface cannot
    /// invert the clamp range.
    pub fn clamp_x(&mut self, surface_width: f32) {
        let hi = (surface_width - self.width - EDGE_MARGIN).max(EDGE_MARGIN);
        self.x = self.x.clamp(EDGE_MARGIN, hi);
    }

    /// Re-center horizontally (new run, resize)
    pub fn center_on(&mut self, surface_width: f32) {
        self.x = surface_width / 2.0 - self.width / 2.0;
        self.vx = 0.0;
        self.clamp_x(surface_width);
    }
}

/// Simulation clock: elapsed play time, spawn accumulator, and the derived
/// difficulty factor. Reset on every entry to `Playing`. The raw frame
/// timestamp anchor lives in the driver, which hands `tick` a delta.
#[derive(Debug, Clone)]
pub struct SimClock {
    /// Total simulated play time this run (seconds)
    pub elapsed: f32,
    /// Time since the last hazard spawn (seconds)
    pub spawn_accum: f32,
    /// `1 + elapsed / difficulty_ramp_secs`, recomputed each tick
    pub difficulty: f32,
}

impl Default for SimClock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            spawn_accum: 0.0,
            difficulty: 1.0,
        }
    }
}

/// Complete game state, mutated in place by `tick`
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed, for log lines and reproducibility
    pub seed: u64,
    /// Seeded RNG for spawn sampling
    pub rng: Pcg32,
    /// Balance knobs (defaults mirror `crate::consts`)
    pub tuning: Tuning,
    /// Playfield size in surface pixels
    pub width: f32,
    pub height: f32,
    pub phase: GamePhase,
    pub player: Player,
    pub hazards: Vec<Hazard>,
    pub clock: SimClock,
    /// Accrues while playing; reset on each entry to `Playing`
    pub score: u64,
    /// Session-best, updated exactly once per run at game over
    pub best: u64,
}

impl GameState {
    pub fn new(seed: u64, width: f32, height: f32, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            width,
            height,
            phase: GamePhase::Idle,
            player: Player::new(width),
            hazards: Vec::new(),
            clock: SimClock::default(),
            score: 0,
            best: 0,
        }
    }

    /// Start a new run (from Idle or Over). Clears score, hazards, and the
    /// clock; re-centers the player; reseeds the RNG. Best is untouched.
    pub fn start_run(&mut self, seed: u64) {
        if self.phase == GamePhase::Playing {
            return;
        }
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
        self.player.center_on(self.width);
        self.hazards.clear();
        self.clock = SimClock::default();
        self.score = 0;
        self.phase = GamePhase::Playing;
        log::info!("Run started (seed {seed})");
    }

    /// End the current run (collision or manual quit). Folds the score into
    /// the session best exactly once.
    pub fn end_run(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.best = self.best.max(self.score);
        self.phase = GamePhase::Over;
        log::info!("Run over: score {} best {}", self.score, self.best);
    }

    /// Apply a new surface size. Player bounds recompute; the player is
    /// re-centered when not mid-run, otherwise just re-clamped.
    pub fn set_surface_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        if self.phase == GamePhase::Playing {
            self.player.clamp_x(width);
        } else {
            self.player.center_on(width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(7, 980.0, 420.0, Tuning::default())
    }

    #[test]
    fn test_initial_player_centered() {
        let s = state();
        assert_eq!(s.phase, GamePhase::Idle);
        assert_eq!(s.player.x, (980.0 - 80.0) / 2.0);
    }

    #[test]
    fn test_player_y_derived() {
        let s = state();
        assert_eq!(s.player.y(420.0), 420.0 - 80.0 - 18.0);
    }

    #[test]
    fn test_clamp_survives_degenerate_width() {
        let mut p = Player::new(980.0);
        p.x = 500.0;
        p.clamp_x(0.0); // momentarily zero surface must not panic
        assert_eq!(p.x, EDGE_MARGIN);
    }

    #[test]
    fn test_lifecycle_resets_score_keeps_best() {
        let mut s = state();
        s.start_run(1);
        s.score = 300;
        s.hazards.push(Hazard::new(glam::Vec2::new(100.0, 50.0), 20.0, 150.0));
        s.end_run();
        assert_eq!(s.phase, GamePhase::Over);
        assert_eq!(s.best, 300);

        s.start_run(2);
        assert_eq!(s.phase, GamePhase::Playing);
        assert_eq!(s.score, 0);
        assert!(s.hazards.is_empty());
        assert_eq!(s.best, 300);
    }

    #[test]
    fn test_best_updates_once_per_run() {
        let mut s = state();
        s.start_run(1);
        s.score = 100;
        s.end_run();
        // A second end_run while already Over must not re-fold
        s.score = 999;
        s.end_run();
        assert_eq!(s.best, 100);
    }

    #[test]
    fn test_best_never_decreases() {
        let mut s = state();
        s.start_run(1);
        s.score = 500;
        s.end_run();
        s.start_run(2);
        s.score = 50;
        s.end_run();
        assert_eq!(s.best, 500);
    }

    #[test]
    fn test_start_noop_while_playing() {
        let mut s = state();
        s.start_run(1);
        s.score = 42;
        s.start_run(9); // ignored mid-run
        assert_eq!(s.score, 42);
        assert_eq!(s.seed, 1);
    }

    #[test]
    fn test_resize_reclamps_mid_run() {
        let mut s = state();
        s.start_run(1);
        s.player.x = 890.0;
        s.set_surface_size(400.0, 420.0);
        assert_eq!(s.player.x, 400.0 - 80.0 - 10.0);
    }
}
