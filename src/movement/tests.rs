//! Movement domain: unit tests for the per-tick controller.

use bevy::math::Vec2;

use super::controller::{jump_allowed, step};
use super::{MovementState, MovementTuning};

/// Tuning with exactly representable rates: at dt = 0.125 the integrator
/// steps by 2.0 accelerating and 3.0 decelerating, so expectations are exact.
fn test_tuning() -> MovementTuning {
    MovementTuning {
        move_speed: 5.0,
        acceleration: 16.0,
        deceleration: 24.0,
        jump_velocity: 10.0,
        ground_ray_length: 0.2,
        ground_ray_offset: Vec2::new(0.0, -0.5),
        flip_delay: 0.1,
    }
}

#[test]
fn test_accelerates_toward_target_without_overshoot() {
    let tuning = test_tuning();
    let mut state = MovementState::default();
    let dt = 0.125; // step of 2.0 per tick

    step(&mut state, &tuning, 1.0, true, dt);
    assert_eq!(state.velocity_x, 2.0);

    step(&mut state, &tuning, 1.0, true, dt);
    assert_eq!(state.velocity_x, 4.0);

    // Remaining distance (1.0) is below the step, so the controller lands
    // exactly on the target instead of overshooting to 6.0.
    step(&mut state, &tuning, 1.0, true, dt);
    assert_eq!(state.velocity_x, 5.0);

    step(&mut state, &tuning, 1.0, true, dt);
    assert_eq!(state.velocity_x, 5.0);
    assert!(state.velocity_x.abs() <= tuning.move_speed);
}

#[test]
fn test_integration_never_moves_away_from_target() {
    let tuning = test_tuning();
    let dt = 0.016;

    for (start, axis) in [(0.0, 1.0), (3.0, 1.0), (-2.0, 1.0), (5.0, -1.0), (4.0, 0.0)] {
        let mut state = MovementState {
            velocity_x: start,
            previous_velocity_x: start,
            ..Default::default()
        };
        let target = axis * tuning.move_speed;
        let before = (start - target).abs();

        step(&mut state, &tuning, axis, false, dt);
        let after = (state.velocity_x - target).abs();

        assert!(
            after <= before + 1e-6,
            "axis {axis} from {start}: distance grew from {before} to {after}"
        );
    }
}

#[test]
fn test_decelerates_to_exact_rest_without_oscillation() {
    let tuning = test_tuning();
    let mut state = MovementState {
        velocity_x: 5.0,
        previous_velocity_x: 5.0,
        ..Default::default()
    };
    let dt = 0.125; // step of 3.0 per tick

    let effects = step(&mut state, &tuning, 0.0, true, dt);
    assert_eq!(state.velocity_x, 2.0);
    assert_eq!(effects.facing, None);

    step(&mut state, &tuning, 0.0, true, dt);
    assert_eq!(state.velocity_x, 0.0);

    // Once at rest it stays there, no swing past zero.
    step(&mut state, &tuning, 0.0, true, dt);
    assert_eq!(state.velocity_x, 0.0);
}

#[test]
fn test_skid_fires_on_grounded_full_speed_reversal() {
    let tuning = test_tuning();
    let mut state = MovementState {
        velocity_x: -4.8,
        previous_velocity_x: -4.8,
        ..Default::default()
    };
    let dt = 0.016;

    let effects = step(&mut state, &tuning, 1.0, true, dt);

    assert!(effects.skid);
    assert_eq!(state.last_move_direction, 1.0);
    // The timer is armed to flip_delay, then ticked once in the same step.
    assert!((state.flip_delay_timer - (tuning.flip_delay - dt)).abs() < 1e-6);
    // Facing is held at the old direction while the flip is pending.
    assert_eq!(effects.facing, None);
}

#[test]
fn test_skid_requires_ground() {
    let tuning = test_tuning();
    let mut state = MovementState {
        velocity_x: -4.8,
        previous_velocity_x: -4.8,
        ..Default::default()
    };

    let effects = step(&mut state, &tuning, 1.0, false, 0.016);

    assert!(!effects.skid);
    // Without a pending flip the facing snaps to the input immediately.
    assert_eq!(effects.facing, Some(1.0));
}

#[test]
fn test_skid_requires_near_top_speed() {
    let tuning = test_tuning();
    let mut state = MovementState {
        velocity_x: -4.0,
        previous_velocity_x: -4.0,
        ..Default::default()
    };

    let effects = step(&mut state, &tuning, 1.0, true, 0.016);
    assert!(!effects.skid);
}

#[test]
fn test_skid_requires_reversal() {
    let tuning = test_tuning();
    let mut state = MovementState {
        velocity_x: 4.8,
        previous_velocity_x: 4.8,
        ..Default::default()
    };

    let effects = step(&mut state, &tuning, 1.0, true, 0.016);
    assert!(!effects.skid);
}

#[test]
fn test_skid_requires_input() {
    let tuning = test_tuning();
    let mut state = MovementState {
        velocity_x: -4.8,
        previous_velocity_x: -4.8,
        ..Default::default()
    };

    let effects = step(&mut state, &tuning, 0.0, true, 0.016);
    assert!(!effects.skid);
}

#[test]
fn test_skid_is_edge_triggered() {
    let tuning = test_tuning();
    let mut state = MovementState {
        velocity_x: -4.8,
        previous_velocity_x: -4.8,
        ..Default::default()
    };
    let dt = 0.02; // one step of 0.32 takes |previous| below the 4.5 threshold

    let effects = step(&mut state, &tuning, 1.0, true, dt);
    assert!(effects.skid);

    // Holding the reversal does not re-fire: the previous velocity has
    // already dropped below the 90% threshold, and once it changes sign
    // the reversal condition itself no longer holds.
    for _ in 0..120 {
        let effects = step(&mut state, &tuning, 1.0, true, dt);
        assert!(!effects.skid);
    }
    assert_eq!(state.velocity_x, 5.0);
}

#[test]
fn test_facing_held_through_delay_then_flips_once() {
    let tuning = test_tuning();
    let mut state = MovementState {
        velocity_x: -4.8,
        previous_velocity_x: -4.8,
        ..Default::default()
    };
    let dt = 0.04;

    // Skid tick arms the 0.1s delay; two more ticks drain it.
    let effects = step(&mut state, &tuning, 1.0, true, dt);
    assert!(effects.skid);
    assert_eq!(effects.facing, None);

    let effects = step(&mut state, &tuning, 1.0, true, dt);
    assert_eq!(effects.facing, None);

    // Timer crosses zero here: the flip lands, exactly once, toward the
    // direction latched at skid time.
    let effects = step(&mut state, &tuning, 1.0, true, dt);
    assert_eq!(effects.facing, Some(1.0));
    assert_eq!(state.flip_delay_timer, 0.0);

    // Back in the idle path the facing just tracks the held input.
    let effects = step(&mut state, &tuning, 1.0, true, dt);
    assert_eq!(effects.facing, Some(1.0));
}

#[test]
fn test_instant_flip_without_pending_skid() {
    let tuning = test_tuning();
    let mut state = MovementState::default();

    let effects = step(&mut state, &tuning, -1.0, true, 0.016);

    assert!(!effects.skid);
    assert_eq!(effects.facing, Some(-1.0));
}

#[test]
fn test_no_facing_change_at_rest() {
    let tuning = test_tuning();
    let mut state = MovementState::default();

    let effects = step(&mut state, &tuning, 0.0, true, 0.016);
    assert_eq!(effects.facing, None);
}

#[test]
fn test_flip_delay_timer_never_negative() {
    let tuning = test_tuning();
    let mut state = MovementState {
        velocity_x: -4.8,
        previous_velocity_x: -4.8,
        ..Default::default()
    };

    // Oversized dt drains the whole delay in one tick; the timer clamps
    // at zero rather than going negative.
    step(&mut state, &tuning, 1.0, true, 0.016);
    let effects = step(&mut state, &tuning, 1.0, true, 0.5);

    assert_eq!(state.flip_delay_timer, 0.0);
    assert_eq!(effects.facing, Some(1.0));
}

#[test]
fn test_speed_stays_bounded_under_input_churn() {
    let tuning = test_tuning();
    let mut state = MovementState::default();
    let pattern = [1.0, 1.0, 1.0, -1.0, -1.0, 0.0, 1.0, -1.0];

    for i in 0..400 {
        let axis = pattern[i % pattern.len()];
        step(&mut state, &tuning, axis, i % 3 != 0, 0.016);
        assert!(state.velocity_x.abs() <= tuning.move_speed + 1e-6);
        assert!(state.flip_delay_timer >= 0.0);
    }
}

#[test]
fn test_jump_gating() {
    let grounded = MovementState {
        on_ground: true,
        ..Default::default()
    };
    let airborne = MovementState::default();

    assert!(jump_allowed(&grounded, true));
    assert!(!jump_allowed(&airborne, true));
    assert!(!jump_allowed(&grounded, false));
    assert!(!jump_allowed(&airborne, false));
}
