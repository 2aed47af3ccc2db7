mod content;
mod core;
mod effects;
mod movement;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Dustrun".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            movement::MovementPlugin,
            effects::EffectsPlugin,
        ))
        .run();
}
