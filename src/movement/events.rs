//! Movement domain: events emitted by the locomotion systems.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Emitted when the player reverses direction at near-top speed on the ground.
#[derive(Debug)]
pub struct SkidEvent {
    /// World position of the player's feet when the skid started.
    pub position: Vec2,
    /// New movement direction, -1.0 or 1.0.
    pub direction: f32,
}

impl Message for SkidEvent {}
