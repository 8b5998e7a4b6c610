//! Hazard spawn policy
//!
//! Pure decision functions: when the next hazard is due, and what it looks
//! like. All randomness comes from the caller's seeded RNG.

use glam::Vec2;
use rand::Rng;

use super::state::Hazard;
use crate::consts::{HAZARD_SPAWN_Y, SPAWN_EDGE_INSET};
use crate::tuning::Tuning;

/// Seconds between spawns at the given elapsed play time. Shrinks linearly
/// with elapsed time and is floored so late-game cadence stays bounded.
pub fn spawn_interval(elapsed: f32, tuning: &Tuning) -> f32 {
    (tuning.spawn_cadence_base - elapsed / tuning.spawn_cadence_ramp)
        .max(tuning.spawn_cadence_min)
}

/// Sample a new hazard just above the playfield. Radius and base fall speed
/// are drawn uniformly from the tuned ranges; fall speed is scaled by the
/// difficulty factor at spawn time and never changes afterward.
///
/// The horizontal range is clamped so a degenerate surface width (e.g. a
/// momentary zero during layout) yields a valid, if pointless, position
/// instead of a panic or NaN.
pub fn sample_hazard<R: Rng>(
    rng: &mut R,
    surface_width: f32,
    difficulty: f32,
    tuning: &Tuning,
) -> Hazard {
    let radius = rng.random_range(tuning.hazard_radius_min..=tuning.hazard_radius_max);
    let x_lo = radius + SPAWN_EDGE_INSET;
    let x_hi = (surface_width - radius - SPAWN_EDGE_INSET).max(x_lo);
    let x = rng.random_range(x_lo..=x_hi);
    let fall_speed =
        rng.random_range(tuning.hazard_speed_min..=tuning.hazard_speed_max) * difficulty;
    Hazard::new(Vec2::new(x, HAZARD_SPAWN_Y), radius, fall_speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_interval_shrinks_and_floors() {
        let t = Tuning::default();
        assert_eq!(spawn_interval(0.0, &t), t.spawn_cadence_base);
        assert!(spawn_interval(10.0, &t) < spawn_interval(5.0, &t));
        // Far into a run the floor holds
        assert_eq!(spawn_interval(600.0, &t), t.spawn_cadence_min);
    }

    #[test]
    fn test_samples_within_ranges() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let h = sample_hazard(&mut rng, 980.0, 1.0, &t);
            assert!(h.radius >= t.hazard_radius_min && h.radius <= t.hazard_radius_max);
            assert!(h.fall_speed >= t.hazard_speed_min && h.fall_speed <= t.hazard_speed_max);
            assert!(h.pos.x >= h.radius + SPAWN_EDGE_INSET);
            assert!(h.pos.x <= 980.0 - h.radius - SPAWN_EDGE_INSET);
            assert_eq!(h.pos.y, HAZARD_SPAWN_Y);
        }
    }

    #[test]
    fn test_difficulty_scales_speed() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let h = sample_hazard(&mut rng, 980.0, 2.0, &t);
        assert!(h.fall_speed >= t.hazard_speed_min * 2.0);
        assert!(h.fall_speed <= t.hazard_speed_max * 2.0);
    }

    #[test]
    fn test_degenerate_width_does_not_panic() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let h = sample_hazard(&mut rng, 0.0, 1.0, &t);
        assert!(h.pos.x.is_finite());
    }

    #[test]
    fn test_deterministic_for_seed() {
        let t = Tuning::default();
        let mut a = Pcg32::seed_from_u64(9);
        let mut b = Pcg32::seed_from_u64(9);
        for _ in 0..20 {
            let ha = sample_hazard(&mut a, 980.0, 1.5, &t);
            let hb = sample_hazard(&mut b, 980.0, 1.5, &t);
            assert_eq!(ha.pos, hb.pos);
            assert_eq!(ha.fall_speed, hb.fall_speed);
        }
    }
}
