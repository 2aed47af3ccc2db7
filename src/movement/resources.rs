//! Movement domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Top horizontal speed, pixels per second.
    pub move_speed: f32,
    /// Approach rate toward the target speed while input is held.
    pub acceleration: f32,
    /// Approach rate toward rest when input is released.
    pub deceleration: f32,
    /// Vertical velocity applied on a ground jump.
    pub jump_velocity: f32,
    /// Length of the downward ground probe ray.
    pub ground_ray_length: f32,
    /// Probe origin offset from the body position, pointing at the feet.
    pub ground_ray_offset: Vec2,
    /// How long the sprite holds its old facing after a skid.
    pub flip_delay: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 320.0,
            acceleration: 2400.0,
            deceleration: 3200.0,
            jump_velocity: 680.0,
            ground_ray_length: 6.0,
            ground_ray_offset: Vec2::new(0.0, -24.0),
            flip_delay: 0.1,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Horizontal axis in [-1, 1].
    pub axis: f32,
    /// Jump key went down this tick (edge, not held).
    pub jump_just_pressed: bool,
}
