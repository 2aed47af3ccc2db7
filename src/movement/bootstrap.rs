//! Movement domain: player and sandbox room spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementState, Player};

pub(crate) fn spawn_player(mut commands: Commands) {
    commands.spawn((
        Player,
        MovementState::default(),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(24.0, 48.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 0.0),
        (
            RigidBody::Dynamic,
            Collider::rectangle(24.0, 48.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let wall_color = Color::srgb(0.3, 0.3, 0.4);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    // Floor
    commands.spawn((
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(1000.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -200.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(1000.0, 40.0),
        ground_layers,
    ));

    // Side walls keep the player in frame; they sit on the ground layer too,
    // the downward probe only sees them when standing on top.
    commands.spawn((
        Sprite {
            color: wall_color,
            custom_size: Some(Vec2::new(40.0, 500.0)),
            ..default()
        },
        Transform::from_xyz(-520.0, 50.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(40.0, 500.0),
        ground_layers,
    ));

    commands.spawn((
        Sprite {
            color: wall_color,
            custom_size: Some(Vec2::new(40.0, 500.0)),
            ..default()
        },
        Transform::from_xyz(520.0, 50.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(40.0, 500.0),
        ground_layers,
    ));

    // A pair of platforms for jump testing
    commands.spawn((
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(150.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(-250.0, -60.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(150.0, 20.0),
        ground_layers,
    ));

    commands.spawn((
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(150.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(250.0, 20.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(150.0, 20.0),
        ground_layers,
    ));
}
