//! Movement domain: grounded platformer locomotion with skid feedback.

mod bootstrap;
mod components;
pub(crate) mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{GameLayer, MovementState, OriginalScale, Player};
pub use events::SkidEvent;
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::movement::bootstrap::{spawn_player, spawn_test_room};
use crate::movement::systems::{
    apply_jump, apply_movement, capture_original_scale, detect_ground, read_input,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<SkidEvent>()
            .add_systems(Startup, (spawn_player, spawn_test_room))
            .add_systems(
                Update,
                (
                    capture_original_scale,
                    read_input,
                    detect_ground,
                    apply_movement,
                    apply_jump,
                )
                    .chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, dev::draw_ground_ray);
    }
}
