//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Component, Debug)]
pub struct MovementState {
    pub on_ground: bool,
    /// Horizontal speed the controller is driving the body at.
    pub velocity_x: f32,
    /// Horizontal speed at the end of the previous tick; the skid check
    /// compares input sign against this, not the freshly integrated value.
    pub previous_velocity_x: f32,
    /// Remaining hold time before a skid flip lands. Zero when no flip is pending.
    pub flip_delay_timer: f32,
    /// Facing latched by the last skid, -1.0 or 1.0.
    pub last_move_direction: f32,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            on_ground: false,
            velocity_x: 0.0,
            previous_velocity_x: 0.0,
            flip_delay_timer: 0.0,
            last_move_direction: 1.0,
        }
    }
}

/// Local scale captured once when the player spawns. Facing flips always
/// derive from this, never from the current (possibly flipped) scale.
#[derive(Component, Debug)]
pub struct OriginalScale(pub Vec3);
