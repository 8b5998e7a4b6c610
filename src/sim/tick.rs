//! Simulation tick
//!
//! Advances one run by one bounded delta-time. The driver feeds raw frame
//! deltas; everything past the phase guard assumes an active run.

use super::collision::circle_rect_hit;
use super::input::Steering;
use super::spawn;
use super::state::{GamePhase, GameState};
use crate::consts::{DESPAWN_MARGIN, MAX_TICK_DT};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Steering decision resolved from the input adapter
    pub steering: Steering,
}

/// Advance the game state by one tick.
///
/// A no-op unless the phase is `Playing`, so a stale frame callback firing
/// after game over cannot mutate anything. The integration delta is clamped
/// to `MAX_TICK_DT`; a tab resumed after minutes in the background advances
/// by at most one clamped step.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let dt = dt.clamp(0.0, MAX_TICK_DT);

    state.clock.elapsed += dt;
    state.clock.difficulty = 1.0 + state.clock.elapsed / state.tuning.difficulty_ramp_secs;

    // Steering: pointer-follow eases a fraction of the remaining distance
    // per tick, keyboard applies a fixed velocity.
    match input.steering {
        Steering::Follow(pointer_x) => {
            let target = pointer_x - state.player.width / 2.0;
            state.player.x += (target - state.player.x) * state.tuning.follow_easing;
        }
        Steering::Discrete(dir) => {
            state.player.vx = dir * state.tuning.key_move_speed;
            state.player.x += state.player.vx * dt;
        }
    }
    state.player.clamp_x(state.width);

    // Spawn on a cadence that tightens as the run goes on
    state.clock.spawn_accum += dt;
    if state.clock.spawn_accum >= spawn::spawn_interval(state.clock.elapsed, &state.tuning) {
        state.clock.spawn_accum = 0.0;
        let hazard = spawn::sample_hazard(
            &mut state.rng,
            state.width,
            state.clock.difficulty,
            &state.tuning,
        );
        state.hazards.push(hazard);
    }

    // Integrate hazards; any overlap with the player ends the run and skips
    // the rest of the tick.
    let hitbox = state.player.hitbox(state.height);
    let mut collided = false;
    for hazard in &mut state.hazards {
        hazard.pos.y += hazard.fall_speed * dt;
        if circle_rect_hit(hazard.pos, hazard.radius, &hitbox) {
            collided = true;
            break;
        }
    }
    if collided {
        state.end_run();
        return;
    }

    // Cull hazards only once fully below the playfield so nothing visible
    // pops out mid-frame
    let cull_line = state.height + DESPAWN_MARGIN;
    state.hazards.retain(|h| h.pos.y <= cull_line);

    // Score is a pure function of play time
    state.score += (state.tuning.score_rate * dt).floor() as u64;
}
