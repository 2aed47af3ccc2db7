//! Effects domain: sprite-based skid dust burst.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::Rng;

use crate::movement::SkidEvent;

#[derive(Component, Debug)]
pub(crate) struct SkidDust {
    velocity: Vec2,
    lifetime: f32,
    age: f32,
}

const DUST_COUNT: usize = 8;
const DUST_GRAVITY: f32 = 300.0;

/// Kick a fan of dust sprites backward from the player's feet on each skid.
pub(crate) fn spawn_skid_dust(mut commands: Commands, mut skid_events: MessageReader<SkidEvent>) {
    let mut rng = rand::rng();

    for event in skid_events.read() {
        for i in 0..DUST_COUNT {
            let spread = i as f32 / DUST_COUNT as f32;
            let speed = rng.random_range(60.0..140.0);
            let lift = rng.random_range(40.0..120.0);
            // Dust flies opposite the new movement direction.
            let velocity = Vec2::new(-event.direction * speed * (0.5 + spread), lift);

            commands.spawn((
                SkidDust {
                    velocity,
                    lifetime: rng.random_range(0.25..0.45),
                    age: 0.0,
                },
                Sprite {
                    color: Color::srgb(0.75, 0.7, 0.6),
                    custom_size: Some(Vec2::splat(rng.random_range(3.0..6.0))),
                    ..default()
                },
                Transform::from_translation(event.position.extend(5.0)),
            ));
        }
    }
}

/// Move, fade, and expire dust particles.
pub(crate) fn update_skid_dust(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut SkidDust, &mut Transform, &mut Sprite)>,
) {
    let dt = time.delta_secs();

    for (entity, mut dust, mut transform, mut sprite) in &mut query {
        dust.age += dt;
        if dust.age >= dust.lifetime {
            commands.entity(entity).despawn();
            continue;
        }

        dust.velocity.y -= DUST_GRAVITY * dt;
        transform.translation.x += dust.velocity.x * dt;
        transform.translation.y += dust.velocity.y * dt;

        let remaining = 1.0 - dust.age / dust.lifetime;
        sprite.color = sprite.color.with_alpha(remaining);
    }
}
