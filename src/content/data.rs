//! Content domain: serde definitions for the tuning data file.

use bevy::prelude::*;
use serde::Deserialize;

use crate::movement::MovementTuning;

/// On-disk movement tuning. Field-for-field mirror of
/// [`MovementTuning`], with the offset as a plain pair so the file
/// stays independent of engine math types.
#[derive(Debug, Clone, Deserialize)]
pub struct MovementTuningDef {
    pub move_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub jump_velocity: f32,
    pub ground_ray_length: f32,
    pub ground_ray_offset: (f32, f32),
    pub flip_delay: f32,
}

impl MovementTuningDef {
    pub(crate) fn apply(&self, tuning: &mut MovementTuning) {
        tuning.move_speed = self.move_speed;
        tuning.acceleration = self.acceleration;
        tuning.deceleration = self.deceleration;
        tuning.jump_velocity = self.jump_velocity;
        tuning.ground_ray_length = self.ground_ray_length;
        tuning.ground_ray_offset = Vec2::new(self.ground_ray_offset.0, self.ground_ray_offset.1);
        tuning.flip_delay = self.flip_delay;
    }
}
