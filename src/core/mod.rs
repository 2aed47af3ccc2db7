//! Core domain: camera and world-level physics setup.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Downward gravity for the sandbox world, in pixels per second squared.
const WORLD_GRAVITY: f32 = 1400.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Gravity(Vec2::NEG_Y * WORLD_GRAVITY))
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
