//! Data-driven game balance
//!
//! All gameplay numbers with tuning value live here so the embedding page
//! can override them (a `data-tuning` JSON attribute on the canvas) without
//! a rebuild. Defaults mirror `crate::consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Keyboard steering speed (px/s)
    pub key_move_speed: f32,
    /// Pointer-follow easing, fraction of remaining distance per tick (0..1]
    pub follow_easing: f32,
    /// Hazard radius range at spawn (px)
    pub hazard_radius_min: f32,
    pub hazard_radius_max: f32,
    /// Hazard fall speed range at spawn (px/s, before difficulty scaling)
    pub hazard_speed_min: f32,
    pub hazard_speed_max: f32,
    /// Spawn cadence: base seconds, shrink ramp, floor (see
    /// `sim::spawn::spawn_interval`)
    pub spawn_cadence_base: f32,
    pub spawn_cadence_min: f32,
    pub spawn_cadence_ramp: f32,
    /// Difficulty factor ramp period (seconds to +1.0)
    pub difficulty_ramp_secs: f32,
    /// Score points per second of play
    pub score_rate: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            key_move_speed: KEY_MOVE_SPEED,
            follow_easing: FOLLOW_EASING,
            hazard_radius_min: HAZARD_RADIUS_MIN,
            hazard_radius_max: HAZARD_RADIUS_MAX,
            hazard_speed_min: HAZARD_SPEED_MIN,
            hazard_speed_max: HAZARD_SPEED_MAX,
            spawn_cadence_base: SPAWN_CADENCE_BASE,
            spawn_cadence_min: SPAWN_CADENCE_MIN,
            spawn_cadence_ramp: SPAWN_CADENCE_RAMP,
            difficulty_ramp_secs: DIFFICULTY_RAMP_SECS,
            score_rate: SCORE_RATE,
        }
    }
}

impl Tuning {
    /// Parse a tuning override blob, falling back to defaults on any problem.
    /// Overrides are a page-author convenience; a malformed blob must never
    /// take the game down.
    pub fn from_json_str(json: &str) -> Self {
        match serde_json::from_str::<Tuning>(json) {
            Ok(tuning) => match tuning.validate() {
                Ok(()) => tuning,
                Err(why) => {
                    log::warn!("Rejecting tuning override ({why}); using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Failed to parse tuning JSON ({e}); using defaults");
                Self::default()
            }
        }
    }

    /// Reject values that would make the simulation degenerate (inverted
    /// ranges, non-positive cadence, NaN anywhere).
    pub fn validate(&self) -> Result<(), &'static str> {
        let fields = [
            self.key_move_speed,
            self.follow_easing,
            self.hazard_radius_min,
            self.hazard_radius_max,
            self.hazard_speed_min,
            self.hazard_speed_max,
            self.spawn_cadence_base,
            self.spawn_cadence_min,
            self.spawn_cadence_ramp,
            self.difficulty_ramp_secs,
            self.score_rate,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err("non-finite value");
        }
        if self.follow_easing <= 0.0 || self.follow_easing > 1.0 {
            return Err("follow_easing out of (0, 1]");
        }
        if self.hazard_radius_min <= 0.0 || self.hazard_radius_max < self.hazard_radius_min {
            return Err("inverted hazard radius range");
        }
        if self.hazard_speed_min <= 0.0 || self.hazard_speed_max < self.hazard_speed_min {
            return Err("inverted hazard speed range");
        }
        if self.spawn_cadence_min <= 0.0 || self.spawn_cadence_base < self.spawn_cadence_min {
            return Err("bad spawn cadence");
        }
        if self.spawn_cadence_ramp <= 0.0 || self.difficulty_ramp_secs <= 0.0 {
            return Err("non-positive ramp period");
        }
        if self.score_rate < 0.0 {
            return Err("negative score rate");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let t = Tuning::from_json_str(r#"{"key_move_speed": 500.0}"#);
        assert_eq!(t.key_move_speed, 500.0);
        // Unspecified fields keep their defaults
        assert_eq!(t.score_rate, SCORE_RATE);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        let t = Tuning::from_json_str("{not json");
        assert_eq!(t.key_move_speed, KEY_MOVE_SPEED);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let t = Tuning::from_json_str(r#"{"hazard_radius_min": 30.0, "hazard_radius_max": 10.0}"#);
        assert_eq!(t.hazard_radius_min, HAZARD_RADIUS_MIN);
    }
}
