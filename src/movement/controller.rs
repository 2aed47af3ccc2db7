//! Movement domain: pure per-tick locomotion logic.
//!
//! Plain math over [`MovementState`], exercised without a physics world.
//! Systems feed in the sampled axis and grounding, then translate the
//! returned effect requests into velocity, scale, and event writes.

use super::{MovementState, MovementTuning};

/// Side effects requested by one controller step.
#[derive(Debug, Default, PartialEq)]
pub struct StepEffects {
    /// A qualifying high-speed reversal happened this tick.
    pub skid: bool,
    /// Horizontal facing to apply, as a sign multiplier for the original scale.
    pub facing: Option<f32>,
}

/// Sign with the convention that zero counts as positive.
fn sign(value: f32) -> f32 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

/// Step `current` toward `target` by at most `max_delta`, landing exactly
/// on the target instead of overshooting.
fn move_toward(current: f32, target: f32, max_delta: f32) -> f32 {
    let remaining = target - current;
    if remaining.abs() <= max_delta {
        target
    } else {
        current + sign(remaining) * max_delta
    }
}

/// Advance the horizontal controller by one tick.
///
/// Order matters: the skid check compares the input sign against the
/// velocity from the previous tick, before integration moves it.
pub(crate) fn step(
    state: &mut MovementState,
    tuning: &MovementTuning,
    axis: f32,
    grounded: bool,
    dt: f32,
) -> StepEffects {
    let mut effects = StepEffects::default();

    let target = axis * tuning.move_speed;

    // Direction reversal at near-top speed on the ground qualifies as a skid.
    let reversed = axis != 0.0 && sign(axis) != sign(state.previous_velocity_x);
    let was_at_speed = state.previous_velocity_x.abs() >= tuning.move_speed * 0.9;

    if reversed && was_at_speed && grounded {
        effects.skid = true;
        state.flip_delay_timer = tuning.flip_delay;
        state.last_move_direction = sign(axis);
    }

    if axis != 0.0 {
        state.velocity_x = move_toward(state.velocity_x, target, tuning.acceleration * dt);
    } else {
        state.velocity_x = move_toward(state.velocity_x, 0.0, tuning.deceleration * dt);
    }

    // Facing holds at the old direction while a skid flip is pending,
    // otherwise it tracks the input immediately.
    if state.flip_delay_timer > 0.0 {
        state.flip_delay_timer -= dt;
        if state.flip_delay_timer <= 0.0 {
            state.flip_delay_timer = 0.0;
            effects.facing = Some(state.last_move_direction);
        }
    } else if axis != 0.0 {
        effects.facing = Some(sign(axis));
    }

    state.previous_velocity_x = state.velocity_x;

    effects
}

/// A jump fires only on the pressed edge and only with ground under the probe.
pub(crate) fn jump_allowed(state: &MovementState, jump_just_pressed: bool) -> bool {
    jump_just_pressed && state.on_ground
}
