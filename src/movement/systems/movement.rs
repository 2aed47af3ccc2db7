//! Movement domain: controller application, facing flip, and jump.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    MovementInput, MovementState, MovementTuning, OriginalScale, Player, SkidEvent, controller,
};

/// Capture the spawn-time scale so facing flips always derive from it.
pub(crate) fn capture_original_scale(
    mut commands: Commands,
    query: Query<(Entity, &Transform), (With<Player>, Added<Player>)>,
) {
    for (entity, transform) in &query {
        commands
            .entity(entity)
            .insert(OriginalScale(transform.scale));
    }
}

pub(crate) fn apply_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut skid_events: MessageWriter<SkidEvent>,
    mut query: Query<
        (
            &mut MovementState,
            &mut LinearVelocity,
            &mut Transform,
            &OriginalScale,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    for (mut state, mut velocity, mut transform, original) in &mut query {
        let grounded = state.on_ground;
        let effects = controller::step(&mut state, &tuning, input.axis, grounded, dt);

        if effects.skid {
            skid_events.write(SkidEvent {
                position: transform.translation.truncate() + tuning.ground_ray_offset,
                direction: state.last_move_direction,
            });
        }

        if let Some(direction) = effects.facing {
            transform.scale = Vec3::new(original.0.x * direction, original.0.y, original.0.z);
        }

        // Horizontal comes from the controller; vertical stays with physics.
        velocity.x = state.velocity_x;
    }
}

pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut LinearVelocity), With<Player>>,
) {
    if !input.jump_just_pressed {
        return;
    }

    for (state, mut velocity) in &mut query {
        debug!("Jump pressed: on_ground={}", state.on_ground);

        if controller::jump_allowed(state, input.jump_just_pressed) {
            velocity.y = tuning.jump_velocity;
        }
    }
}
